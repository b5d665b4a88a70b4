use async_trait::async_trait;

use crate::modules::education::application::domain::entities::{Education, NewEducation};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Newest first: `startYear` descending, ties by id ascending.
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError>;

    async fn add(&self, new: NewEducation) -> Result<Education, EducationRepositoryError>;
}
