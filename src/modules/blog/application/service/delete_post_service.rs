use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    DeletePostError, DeletePostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError, UploadedFileStore,
};

pub struct DeletePostService<R>
where
    R: BlogPostRepository,
{
    repository: R,
    files: Arc<dyn UploadedFileStore + Send + Sync>,
}

impl<R> DeletePostService<R>
where
    R: BlogPostRepository,
{
    pub fn new(repository: R, files: Arc<dyn UploadedFileStore + Send + Sync>) -> Self {
        Self { repository, files }
    }
}

#[async_trait]
impl<R> DeletePostUseCase for DeletePostService<R>
where
    R: BlogPostRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<BlogPost, DeletePostError> {
        let removed = self.repository.delete_post(id).await.map_err(|e| match e {
            BlogPostRepositoryError::NotFound => DeletePostError::NotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        })?;

        // Row is gone at this point; a leftover file is only logged.
        if let Some(path) = &removed.file_path {
            if let Err(e) = self.files.remove(path).await {
                warn!(id, path = %path, error = %e, "failed to remove uploaded file");
            }
        }

        info!(id, slug = %removed.slug, "blog post deleted");
        Ok(removed)
    }
}
