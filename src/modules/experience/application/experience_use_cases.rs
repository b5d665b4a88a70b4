use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, GetExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceRepository;
use crate::modules::experience::application::service::{
    CreateExperienceService, GetExperienceService,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
}

impl ExperienceUseCases {
    pub fn new<R>(repository: R) -> Self
    where
        R: ExperienceRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetExperienceService::new(repository.clone())),
            create: Arc::new(CreateExperienceService::new(repository)),
        }
    }
}
