use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("contact message not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Most recent first; ties by id descending.
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    async fn add(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, ContactMessageRepositoryError>;
}
