use async_trait::async_trait;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetPostBySlugError, GetPostBySlugUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostQuery, BlogPostQueryError};

pub struct GetPostBySlugService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
}

impl<Q> GetPostBySlugService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostBySlugUseCase for GetPostBySlugService<Q>
where
    Q: BlogPostQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogPost, GetPostBySlugError> {
        self.query.get_by_slug(slug).await.map_err(|e| match e {
            BlogPostQueryError::NotFound => GetPostBySlugError::NotFound,
            BlogPostQueryError::DatabaseError(msg) => GetPostBySlugError::RepositoryError(msg),
        })
    }
}
