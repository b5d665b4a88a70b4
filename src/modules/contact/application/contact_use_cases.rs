use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactMessageUseCase, GetContactMessagesUseCase, MarkContactMessageReadUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepository;
use crate::modules::contact::application::service::{
    CreateContactMessageService, GetContactMessagesService, MarkContactMessageReadService,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_list: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateContactMessageUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkContactMessageReadUseCase + Send + Sync>,
}

impl ContactUseCases {
    pub fn new<R>(repository: R) -> Self
    where
        R: ContactMessageRepository + Clone + 'static,
    {
        Self {
            get_list: Arc::new(GetContactMessagesService::new(repository.clone())),
            create: Arc::new(CreateContactMessageService::new(repository.clone())),
            mark_read: Arc::new(MarkContactMessageReadService::new(repository)),
        }
    }
}
