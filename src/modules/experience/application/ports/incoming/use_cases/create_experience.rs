use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, NewExperience};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, new: NewExperience) -> Result<Experience, CreateExperienceError>;
}
