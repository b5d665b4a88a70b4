use async_trait::async_trait;
use tracing::info;

use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError,
};

pub struct CreatePostService<R>
where
    R: BlogPostRepository,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: BlogPostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, new: NewBlogPost) -> Result<BlogPost, CreatePostError> {
        let created = self.repository.create_post(new).await.map_err(|e| match e {
            BlogPostRepositoryError::SlugAlreadyExists => CreatePostError::SlugAlreadyExists,
            other => CreatePostError::RepositoryError(other.to_string()),
        })?;

        info!(id = created.id, slug = %created.slug, "blog post created");
        Ok(created)
    }
}
