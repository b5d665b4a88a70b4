use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    self as projects, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entity).collect()
    }

    async fn list_featured(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = Entity::find()
            .filter(Column::Featured.eq(true))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entity).collect()
    }

    async fn add(&self, new: NewProject) -> Result<Project, ProjectRepositoryError> {
        let model = new_active_model(new)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_entity(inserted)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn new_active_model(new: NewProject) -> Result<ActiveModel, ProjectRepositoryError> {
    Ok(ActiveModel {
        title: Set(new.title),
        description: Set(new.description),
        technologies: Set(to_json(&new.technologies)?),
        github_url: Set(new.github_url),
        live_url: Set(new.live_url),
        image_url: Set(new.image_url),
        featured: Set(new.featured),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_entity(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        technologies: from_json(&model.technologies)?,
        github_url: model.github_url,
        live_url: model.live_url,
        image_url: model.image_url,
        featured: model.featured,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
