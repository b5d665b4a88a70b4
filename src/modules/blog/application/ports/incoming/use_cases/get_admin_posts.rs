use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPostAdminView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAdminPostsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAdminPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPostAdminView>, GetAdminPostsError>;
}
