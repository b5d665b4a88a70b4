use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::{
    self as contact_messages, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_entity).collect())
    }

    async fn add(
        &self,
        new: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            subject: Set(new.subject),
            message: Set(new.message),
            read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_entity(inserted))
    }

    async fn mark_read(&self, id: i32) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactMessageRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.read = Set(true);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_entity(updated))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_entity(model: contact_messages::Model) -> ContactMessage {
    ContactMessage {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        created_at: model.created_at.into(),
        read: model.read,
    }
}

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
