use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{NewProject, Project};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insertion (id) order.
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Same order as `list`, restricted to `featured == true`.
    async fn list_featured(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn add(&self, new: NewProject) -> Result<Project, ProjectRepositoryError>;
}
