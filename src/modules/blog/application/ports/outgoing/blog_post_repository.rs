use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("blog post not found")]
    NotFound,

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_post(&self, new: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError>;

    /// Flips `published` and refreshes `updated_at`.
    async fn toggle_publish(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError>;

    /// Returns the removed record.
    async fn delete_post(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError>;
}
