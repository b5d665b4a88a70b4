use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::education::adapter::outgoing::sea_orm_entity::{
    self as education, ActiveModel, Column, Entity,
};
use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::education::application::ports::outgoing::{
    EducationRepository, EducationRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::StartYear)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_entity).collect())
    }

    async fn add(&self, new: NewEducation) -> Result<Education, EducationRepositoryError> {
        let model = new_active_model(new);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_entity(inserted))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn new_active_model(new: NewEducation) -> ActiveModel {
    ActiveModel {
        degree: Set(new.degree),
        institution: Set(new.institution),
        location: Set(new.location),
        start_year: Set(new.start_year),
        end_year: Set(new.end_year),
        description: Set(new.description),
        gpa: Set(new.gpa),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn model_to_entity(model: education::Model) -> Education {
    Education {
        id: model.id,
        degree: model.degree,
        institution: model.institution,
        location: model.location,
        start_year: model.start_year,
        end_year: model.end_year,
        description: model.description,
        gpa: model.gpa,
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
