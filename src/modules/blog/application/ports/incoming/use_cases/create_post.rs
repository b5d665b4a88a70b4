use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, new: NewBlogPost) -> Result<BlogPost, CreatePostError>;
}
