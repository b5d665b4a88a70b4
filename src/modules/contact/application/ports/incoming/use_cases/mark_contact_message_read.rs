use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkContactMessageReadError {
    #[error("contact message not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkContactMessageReadUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<ContactMessage, MarkContactMessageReadError>;
}
