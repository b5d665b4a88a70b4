use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{BlogPostQuery, BlogPostQueryError};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct BlogPostQueryMemory {
    store: Arc<InMemoryStore>,
}

impl BlogPostQueryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn newest_first(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    posts
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryMemory {
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let collection = self.store.blog_posts.read().await;
        Ok(newest_first(collection.filtered(|p| p.published)))
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let collection = self.store.blog_posts.read().await;
        Ok(newest_first(collection.snapshot()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogPostQueryError> {
        let collection = self.store.blog_posts.read().await;
        collection
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(BlogPostQueryError::NotFound)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, BlogPostQueryError> {
        let collection = self.store.blog_posts.read().await;
        Ok(collection.find(|p| p.slug == slug).is_some())
    }
}
