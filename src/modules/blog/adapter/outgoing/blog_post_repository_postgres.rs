use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::{
    self as blog_posts, ActiveModel, Entity,
};
use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};
use crate::modules::blog::application::ports::outgoing::{
    BlogPostRepository, BlogPostRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_existing(&self, id: i32) -> Result<blog_posts::Model, BlogPostRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogPostRepositoryError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn create_post(&self, new: NewBlogPost) -> Result<BlogPost, BlogPostRepositoryError> {
        let model = new_active_model(new, Utc::now())?;

        let inserted = model.insert(&*self.db).await.map_err(map_slug_err)?;

        model_to_post(inserted).map_err(BlogPostRepositoryError::DatabaseError)
    }

    async fn toggle_publish(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError> {
        let existing = self.find_existing(id).await?;
        let published = existing.published;

        let mut model: ActiveModel = existing.into();
        model.published = Set(!published);
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        model_to_post(updated).map_err(BlogPostRepositoryError::DatabaseError)
    }

    async fn delete_post(&self, id: i32) -> Result<BlogPost, BlogPostRepositoryError> {
        let existing = self.find_existing(id).await?;

        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(BlogPostRepositoryError::NotFound);
        }

        model_to_post(existing).map_err(BlogPostRepositoryError::DatabaseError)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn new_active_model(
    new: NewBlogPost,
    created_at: DateTime<Utc>,
) -> Result<ActiveModel, BlogPostRepositoryError> {
    let tags = serde_json::to_value(&new.tags)
        .map_err(|e| BlogPostRepositoryError::DatabaseError(e.to_string()))?;

    Ok(ActiveModel {
        title: Set(new.title),
        slug: Set(new.slug),
        content: Set(new.content),
        excerpt: Set(new.excerpt),
        published: Set(new.published),
        tags: Set(tags),
        file_path: Set(new.file_path),
        original_filename: Set(new.original_filename),
        created_at: Set(created_at.fixed_offset()),
        updated_at: Set(created_at.fixed_offset()),
        ..Default::default()
    })
}

pub(crate) fn model_to_post(model: blog_posts::Model) -> Result<BlogPost, String> {
    let tags: Vec<String> = serde_json::from_value(model.tags).map_err(|e| e.to_string())?;

    Ok(BlogPost {
        id: model.id,
        title: model.title,
        slug: model.slug,
        content: model.content,
        excerpt: model.excerpt,
        published: model.published,
        tags,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
        original_filename: model.original_filename,
        file_path: model.file_path,
    })
}

fn map_slug_err(e: DbErr) -> BlogPostRepositoryError {
    let unique_violation = matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        || e.to_string().contains("duplicate key");

    if unique_violation {
        BlogPostRepositoryError::SlugAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> BlogPostRepositoryError {
    BlogPostRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn mock_model(id: i32, slug: &str, published: bool) -> blog_posts::Model {
        blog_posts::Model {
            id,
            title: "Title".to_string(),
            slug: slug.to_string(),
            content: "Content".to_string(),
            excerpt: Some("Excerpt...".to_string()),
            published,
            tags: json!(["Article", "Upload"]),
            file_path: Some(format!("uploads/1700000000000-{slug}.docx")),
            original_filename: Some(format!("{slug}.docx")),
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    fn new_post(slug: &str) -> NewBlogPost {
        NewBlogPost {
            title: "Title".to_string(),
            slug: slug.to_string(),
            content: "Content".to_string(),
            excerpt: None,
            published: false,
            tags: vec![],
            file_path: None,
            original_filename: None,
        }
    }

    // ========================================================================
    // create_post Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_post_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(7, "hello", false)]])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_post(new_post("hello")).await.unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.tags, vec!["Article", "Upload"]);
        assert_eq!(created.file_path.as_deref(), Some("uploads/1700000000000-hello.docx"));
    }

    #[tokio::test]
    async fn test_create_post_duplicate_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_blog_posts_slug_unique\""
                    .to_string(),
            )])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_post(new_post("hello")).await;

        assert!(matches!(
            result,
            Err(BlogPostRepositoryError::SlugAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_create_post_other_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_post(new_post("hello")).await;

        assert!(matches!(
            result,
            Err(BlogPostRepositoryError::DatabaseError(_))
        ));
    }

    // ========================================================================
    // toggle_publish Tests
    // ========================================================================

    #[tokio::test]
    async fn test_toggle_publish_flips_flag() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(2, "post", false)]])
            .append_query_results(vec![vec![mock_model(2, "post", true)]])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));
        let toggled = repo.toggle_publish(2).await.unwrap();

        assert!(toggled.published);
    }

    #[tokio::test]
    async fn test_toggle_publish_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.toggle_publish(2).await,
            Err(BlogPostRepositoryError::NotFound)
        ));
    }

    // ========================================================================
    // delete_post Tests
    // ========================================================================

    #[tokio::test]
    async fn test_delete_post_returns_removed_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(4, "gone", true)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));
        let removed = repo.delete_post(4).await.unwrap();

        assert_eq!(removed.slug, "gone");
        assert!(removed.file_path.is_some());
    }

    #[tokio::test]
    async fn test_delete_post_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_posts::Model>::new()])
            .into_connection();

        let repo = BlogPostRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_post(4).await,
            Err(BlogPostRepositoryError::NotFound)
        ));
    }
}
