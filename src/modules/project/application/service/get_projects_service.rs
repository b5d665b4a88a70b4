use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// All projects
// ──────────────────────────────────────────────────────────
//

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.repository.list().await.map_err(map_repo_err)
    }
}

//
// ──────────────────────────────────────────────────────────
// Featured projects
// ──────────────────────────────────────────────────────────
//

pub struct GetFeaturedProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetFeaturedProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.repository.list_featured().await.map_err(map_repo_err)
    }
}

fn map_repo_err(e: ProjectRepositoryError) -> GetProjectsError {
    match e {
        ProjectRepositoryError::DatabaseError(msg)
        | ProjectRepositoryError::SerializationError(msg) => GetProjectsError::RepositoryError(msg),
    }
}
