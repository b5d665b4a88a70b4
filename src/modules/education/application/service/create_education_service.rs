use async_trait::async_trait;
use tracing::info;

use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError,
};

pub struct CreateEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> CreateEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for CreateEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, new: NewEducation) -> Result<Education, CreateEducationError> {
        let created = self.repository.add(new).await.map_err(|e| match e {
            EducationRepositoryError::DatabaseError(msg) => {
                CreateEducationError::RepositoryError(msg)
            }
        })?;

        info!(id = created.id, "education entry created");
        Ok(created)
    }
}
