use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct ProjectRepositoryMemory {
    store: Arc<InMemoryStore>,
}

impl ProjectRepositoryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryMemory {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        Ok(self.store.projects.read().await.snapshot())
    }

    async fn list_featured(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let collection = self.store.projects.read().await;
        Ok(collection.filtered(|p| p.featured))
    }

    async fn add(&self, new: NewProject) -> Result<Project, ProjectRepositoryError> {
        let mut collection = self.store.projects.write().await;
        Ok(collection.insert_with(|id| new.into_project(id)))
    }
}
