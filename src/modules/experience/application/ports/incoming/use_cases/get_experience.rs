use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperienceError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperienceError>;
}
