use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEducationError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError>;
}
