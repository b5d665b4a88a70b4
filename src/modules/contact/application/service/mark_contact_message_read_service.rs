use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    MarkContactMessageReadError, MarkContactMessageReadUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

pub struct MarkContactMessageReadService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> MarkContactMessageReadService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkContactMessageReadUseCase for MarkContactMessageReadService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<ContactMessage, MarkContactMessageReadError> {
        let updated = self.repository.mark_read(id).await.map_err(|e| match e {
            ContactMessageRepositoryError::NotFound => MarkContactMessageReadError::NotFound,
            ContactMessageRepositoryError::DatabaseError(msg) => {
                MarkContactMessageReadError::RepositoryError(msg)
            }
        })?;

        info!(id, "contact message marked read");
        Ok(updated)
    }
}
