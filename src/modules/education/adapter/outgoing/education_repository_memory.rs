use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::education::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError,
};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct EducationRepositoryMemory {
    store: Arc<InMemoryStore>,
}

impl EducationRepositoryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryMemory {
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        let mut items = self.store.education.read().await.snapshot();
        items.sort_by(|a, b| {
            b.start_year
                .cmp(&a.start_year)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(items)
    }

    async fn add(&self, new: NewEducation) -> Result<Education, EducationRepositoryError> {
        let mut collection = self.store.education.write().await;
        Ok(collection.insert_with(|id| new.into_education(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_education(degree: &str, start_year: &str) -> NewEducation {
        NewEducation {
            degree: degree.to_string(),
            institution: "Uni".to_string(),
            location: "Paris".to_string(),
            start_year: start_year.to_string(),
            end_year: None,
            description: None,
            gpa: None,
        }
    }

    #[tokio::test]
    async fn seeded_list_is_newest_first() {
        let repo = EducationRepositoryMemory::new(Arc::new(InMemoryStore::seeded()));

        let items = repo.list().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].start_year, "2022");
        assert_eq!(items[1].start_year, "2018");
    }

    #[tokio::test]
    async fn add_continues_after_seeded_ids() {
        let repo = EducationRepositoryMemory::new(Arc::new(InMemoryStore::seeded()));

        let first = repo.add(new_education("PhD", "2024")).await.unwrap();
        let second = repo.add(new_education("Diploma", "2010")).await.unwrap();

        assert_eq!(first.id, 3);
        assert_eq!(second.id, 4);
        assert_eq!(first.degree, "PhD");
    }

    #[tokio::test]
    async fn ties_on_start_year_keep_id_order() {
        let repo = EducationRepositoryMemory::new(Arc::new(InMemoryStore::empty()));

        repo.add(new_education("A", "2020")).await.unwrap();
        repo.add(new_education("B", "2020")).await.unwrap();
        repo.add(new_education("C", "2021")).await.unwrap();

        let degrees: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.degree)
            .collect();

        assert_eq!(degrees, vec!["C", "A", "B"]);
    }
}
