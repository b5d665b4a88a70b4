use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select,
};
use std::sync::Arc;

use crate::modules::blog::adapter::outgoing::blog_post_repository_postgres::model_to_post;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::{Column, Entity};
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{BlogPostQuery, BlogPostQueryError};

#[derive(Clone)]
pub struct BlogPostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_newest_first(
        &self,
        select: Select<Entity>,
    ) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let models = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| model_to_post(m).map_err(BlogPostQueryError::DatabaseError))
            .collect()
    }
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryPostgres {
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        self.fetch_newest_first(Entity::find().filter(Column::Published.eq(true)))
            .await
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        self.fetch_newest_first(Entity::find()).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogPostQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogPostQueryError::NotFound)?;

        model_to_post(model).map_err(BlogPostQueryError::DatabaseError)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, BlogPostQueryError> {
        let count = Entity::find()
            .filter(Column::Slug.eq(slug))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

fn map_db_err(e: DbErr) -> BlogPostQueryError {
    BlogPostQueryError::DatabaseError(e.to_string())
}
