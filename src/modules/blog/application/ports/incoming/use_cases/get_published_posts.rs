use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPublishedPostsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublishedPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPublishedPostsError>;
}
