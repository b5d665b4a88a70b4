use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{NewProject, Project};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, new: NewProject) -> Result<Project, CreateProjectError>;
}
