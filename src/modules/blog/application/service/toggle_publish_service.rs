use async_trait::async_trait;
use tracing::info;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    TogglePublishError, TogglePublishUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError,
};

pub struct TogglePublishService<R>
where
    R: BlogPostRepository,
{
    repository: R,
}

impl<R> TogglePublishService<R>
where
    R: BlogPostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TogglePublishUseCase for TogglePublishService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<BlogPost, TogglePublishError> {
        let post = self.repository.toggle_publish(id).await.map_err(|e| match e {
            BlogPostRepositoryError::NotFound => TogglePublishError::NotFound,
            other => TogglePublishError::RepositoryError(other.to_string()),
        })?;

        info!(id, published = post.published, "blog post publish state toggled");
        Ok(post)
    }
}
