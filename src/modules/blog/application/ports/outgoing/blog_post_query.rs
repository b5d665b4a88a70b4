use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostQueryError {
    #[error("blog post not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Read side of the blog collection. Lists are newest first.
#[async_trait]
pub trait BlogPostQuery: Send + Sync {
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostQueryError>;

    /// Drafts included.
    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogPostQueryError>;

    /// Exact, case-sensitive match.
    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogPostQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, BlogPostQueryError>;
}
