use async_trait::async_trait;

use crate::modules::education::application::domain::entities::{Education, NewEducation};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEducationError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, new: NewEducation) -> Result<Education, CreateEducationError>;
}
