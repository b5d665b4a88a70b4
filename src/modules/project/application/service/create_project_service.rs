use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, new: NewProject) -> Result<Project, CreateProjectError> {
        let created = self
            .project_repository
            .add(new)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
            })?;

        info!(id = created.id, featured = created.featured, "project created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct MockProjectRepo {
        result: Result<Project, ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn list_featured(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn add(&self, _new: NewProject) -> Result<Project, ProjectRepositoryError> {
            self.result.clone()
        }
    }

    fn sample_new() -> NewProject {
        NewProject {
            title: "Title".to_string(),
            description: "Desc".to_string(),
            technologies: vec!["Rust".to_string()],
            github_url: None,
            live_url: None,
            image_url: None,
            featured: true,
        }
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_success() {
        let repo = MockProjectRepo {
            result: Ok(sample_new().into_project(5)),
        };
        let service = CreateProjectService::new(repo);

        let created = service.execute(sample_new()).await.unwrap();

        assert_eq!(created.id, 5);
        assert!(created.featured);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let repo = MockProjectRepo {
            result: Err(ProjectRepositoryError::DatabaseError("db down".to_string())),
        };
        let service = CreateProjectService::new(repo);

        let res = service.execute(sample_new()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::RepositoryError(msg) if msg == "db down"
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_serialization_error() {
        let repo = MockProjectRepo {
            result: Err(ProjectRepositoryError::SerializationError(
                "bad json".to_string(),
            )),
        };
        let service = CreateProjectService::new(repo);

        let res = service.execute(sample_new()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::RepositoryError(msg) if msg == "bad json"
        ));
    }
}
