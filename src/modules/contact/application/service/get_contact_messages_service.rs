use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactMessagesError, GetContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

pub struct GetContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> GetContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContactMessagesUseCase for GetContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessagesError> {
        self.repository.list().await.map_err(|e| match e {
            ContactMessageRepositoryError::DatabaseError(msg) => {
                GetContactMessagesError::RepositoryError(msg)
            }
            ContactMessageRepositoryError::NotFound => GetContactMessagesError::RepositoryError(
                "unexpected not found while listing messages".to_string(),
            ),
        })
    }
}
