use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("blog post not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<BlogPost, DeletePostError>;
}
