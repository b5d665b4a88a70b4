use std::sync::Arc;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, GetEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::modules::education::application::service::{
    CreateEducationService, GetEducationService,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub get_list: Arc<dyn GetEducationUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
}

impl EducationUseCases {
    pub fn new<R>(repository: R) -> Self
    where
        R: EducationRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetEducationService::new(repository.clone())),
            create: Arc::new(CreateEducationService::new(repository)),
        }
    }
}
