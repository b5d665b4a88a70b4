use async_trait::async_trait;
use tracing::info;

use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, new: NewExperience) -> Result<Experience, CreateExperienceError> {
        let created = self.repository.add(new).await.map_err(|e| match e {
            ExperienceRepositoryError::DatabaseError(msg)
            | ExperienceRepositoryError::SerializationError(msg) => {
                CreateExperienceError::RepositoryError(msg)
            }
        })?;

        info!(id = created.id, company = %created.company, "experience entry created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::modules::experience::adapter::outgoing::ExperienceRepositoryMemory;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn created_experience_gets_next_seeded_id() {
        let repo = ExperienceRepositoryMemory::new(Arc::new(InMemoryStore::seeded()));
        let service = CreateExperienceService::new(repo);

        let created = service
            .execute(NewExperience {
                title: "Staff Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                start_date: "2025-02".to_string(),
                end_date: None,
                description: "Platform work".to_string(),
                technologies: vec!["Rust".to_string()],
                is_current_job: true,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(created.technologies, vec!["Rust"]);
        assert!(created.is_current_job);
    }
}
