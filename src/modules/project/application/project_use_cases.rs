use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetFeaturedProjectsUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::modules::project::application::service::{
    CreateProjectService, GetFeaturedProjectsService, GetProjectsService,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
}

impl ProjectUseCases {
    pub fn new<R>(repository: R) -> Self
    where
        R: ProjectRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetProjectsService::new(repository.clone())),
            get_featured: Arc::new(GetFeaturedProjectsService::new(repository.clone())),
            create: Arc::new(CreateProjectService::new(repository)),
        }
    }
}
