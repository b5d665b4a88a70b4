use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostBySlugError {
    #[error("blog post not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogPost, GetPostBySlugError>;
}
