use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetPublishedPostsError, GetPublishedPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::BlogPostQuery;

pub struct GetPublishedPostsService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
}

impl<Q> GetPublishedPostsService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublishedPostsUseCase for GetPublishedPostsService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPublishedPostsError> {
        self.query
            .list_published()
            .await
            .map_err(|e| GetPublishedPostsError::RepositoryError(e.to_string()))
    }
}
