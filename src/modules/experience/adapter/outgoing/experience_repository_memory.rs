use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct ExperienceRepositoryMemory {
    store: Arc<InMemoryStore>,
}

impl ExperienceRepositoryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryMemory {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let mut items = self.store.experience.read().await.snapshot();
        items.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(items)
    }

    async fn add(&self, new: NewExperience) -> Result<Experience, ExperienceRepositoryError> {
        let mut collection = self.store.experience.write().await;
        Ok(collection.insert_with(|id| new.into_experience(id)))
    }
}
