use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactMessageError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, CreateContactMessageError>;
}
