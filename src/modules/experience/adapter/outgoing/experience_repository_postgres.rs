use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{
    self as experience, ActiveModel, Column, Entity,
};
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entity).collect()
    }

    async fn add(&self, new: NewExperience) -> Result<Experience, ExperienceRepositoryError> {
        let model = new_active_model(new)?;

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_entity(inserted)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn new_active_model(
    new: NewExperience,
) -> Result<ActiveModel, ExperienceRepositoryError> {
    Ok(ActiveModel {
        title: Set(new.title),
        company: Set(new.company),
        location: Set(new.location),
        start_date: Set(new.start_date),
        end_date: Set(new.end_date),
        description: Set(new.description),
        technologies: Set(to_json(&new.technologies)?),
        is_current_job: Set(new.is_current_job),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_entity(model: experience::Model) -> Result<Experience, ExperienceRepositoryError> {
    Ok(Experience {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        technologies: from_json(&model.technologies)?,
        is_current_job: model.is_current_job,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ExperienceRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
