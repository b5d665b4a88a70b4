use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::{
    GetEducationError, GetEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError,
};

pub struct GetEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> GetEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEducationUseCase for GetEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        self.repository.list().await.map_err(|e| match e {
            EducationRepositoryError::DatabaseError(msg) => GetEducationError::RepositoryError(msg),
        })
    }
}
