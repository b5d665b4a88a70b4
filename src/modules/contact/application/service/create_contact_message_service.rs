use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactMessageError, CreateContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

pub struct CreateContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> CreateContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContactMessageUseCase for CreateContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, CreateContactMessageError> {
        let created = self.repository.add(new).await.map_err(|e| match e {
            ContactMessageRepositoryError::DatabaseError(msg) => {
                CreateContactMessageError::RepositoryError(msg)
            }
            ContactMessageRepositoryError::NotFound => CreateContactMessageError::RepositoryError(
                "unexpected not found while storing message".to_string(),
            ),
        })?;

        info!(id = created.id, "contact message received");
        Ok(created)
    }
}
