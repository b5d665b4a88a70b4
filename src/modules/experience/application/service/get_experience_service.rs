use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct GetExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperienceUseCase for GetExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperienceError> {
        self.repository.list().await.map_err(|e| match e {
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                GetExperienceError::RepositoryError(msg)
            }
        })
    }
}
