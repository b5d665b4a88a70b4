use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::blog::application::domain::derivation::word_count;
use crate::modules::blog::application::domain::entities::BlogPostAdminView;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetAdminPostsError, GetAdminPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostQuery, UploadedFileStore};

/// Every post, drafts included, annotated with whether its uploaded
/// original is still on disk.
pub struct GetAdminPostsService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
    files: Arc<dyn UploadedFileStore + Send + Sync>,
}

impl<Q> GetAdminPostsService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q, files: Arc<dyn UploadedFileStore + Send + Sync>) -> Self {
        Self { query, files }
    }
}

#[async_trait]
impl<Q> GetAdminPostsUseCase for GetAdminPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPostAdminView>, GetAdminPostsError> {
        let posts = self
            .query
            .list_all()
            .await
            .map_err(|e| GetAdminPostsError::RepositoryError(e.to_string()))?;

        let mut views = Vec::with_capacity(posts.len());
        for post in posts {
            let file_exists = match &post.file_path {
                Some(path) => self.files.exists(path).await,
                None => false,
            };
            let word_count = word_count(&post.content);

            views.push(BlogPostAdminView {
                post,
                file_exists,
                word_count,
            });
        }

        Ok(views)
    }
}
