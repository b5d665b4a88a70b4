use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct ContactMessageRepositoryMemory {
    store: Arc<InMemoryStore>,
}

impl ContactMessageRepositoryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryMemory {
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let mut items = self.store.contact_messages.read().await.snapshot();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn add(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let mut collection = self.store.contact_messages.write().await;
        Ok(collection.insert_with(|id| new.into_message(id, Utc::now())))
    }

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let mut collection = self.store.contact_messages.write().await;
        let message = collection
            .find_mut(|m| m.id == id)
            .ok_or(ContactMessageRepositoryError::NotFound)?;

        message.read = true;
        Ok(message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let repo = ContactMessageRepositoryMemory::new(Arc::new(InMemoryStore::empty()));
        let created = repo.add(message("Cy")).await.unwrap();

        repo.mark_read(created.id).await.unwrap();
        let again = repo.mark_read(created.id).await.unwrap();

        assert!(again.read);
        assert!(repo.list().await.unwrap()[0].read);
    }

    #[tokio::test]
    async fn mark_read_unknown_id() {
        let repo = ContactMessageRepositoryMemory::new(Arc::new(InMemoryStore::empty()));

        let result = repo.mark_read(1).await;

        assert!(matches!(result, Err(ContactMessageRepositoryError::NotFound)));
    }
}
