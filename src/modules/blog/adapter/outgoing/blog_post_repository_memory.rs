use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError,
};
use crate::storage::InMemoryStore;

#[derive(Clone)]
pub struct BlogPostRepositoryMemory {
    store: Arc<InMemoryStore>,
}

impl BlogPostRepositoryMemory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryMemory {
    async fn create_post(&self, new: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut collection = self.store.blog_posts.write().await;
        if collection.find(|p| p.slug == new.slug).is_some() {
            return Err(BlogPostRepositoryError::SlugAlreadyExists);
        }

        Ok(collection.insert_with(|id| new.into_post(id, Utc::now())))
    }

    async fn toggle_publish(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut collection = self.store.blog_posts.write().await;
        let post = collection
            .find_mut(|p| p.id == id)
            .ok_or(BlogPostRepositoryError::NotFound)?;

        post.published = !post.published;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut collection = self.store.blog_posts.write().await;
        collection
            .remove(|p| p.id == id)
            .ok_or(BlogPostRepositoryError::NotFound)
    }
}
