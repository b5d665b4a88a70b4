use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, NewExperience};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Most recent first: `startDate` descending, ties by id ascending.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn add(&self, new: NewExperience) -> Result<Experience, ExperienceRepositoryError>;
}
