use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
};
use std::time::Duration;
use tracing::info;

use crate::modules::blog::adapter::outgoing::{
    blog_post_repository_postgres, sea_orm_entity as blog_posts,
};
use crate::modules::education::adapter::outgoing::{
    education_repository_postgres, sea_orm_entity as education,
};
use crate::modules::experience::adapter::outgoing::{
    experience_repository_postgres, sea_orm_entity as experience,
};
use crate::modules::project::adapter::outgoing::{
    project_repository_postgres, sea_orm_entity as projects,
};
use crate::storage::{seed, StorageError};

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, StorageError> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| StorageError::Connect(e.to_string()))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    info!("Database migrations applied");

    Ok(conn)
}

fn seed_err(e: impl std::fmt::Display) -> StorageError {
    StorageError::Seed(e.to_string())
}

/// Inserts the sample records into each table that has no rows yet.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), StorageError> {
    if education::Entity::find().count(db).await.map_err(seed_err)? == 0 {
        for new in seed::education() {
            education_repository_postgres::new_active_model(new)
                .insert(db)
                .await
                .map_err(seed_err)?;
        }
        info!("Seeded education table");
    }

    if experience::Entity::find().count(db).await.map_err(seed_err)? == 0 {
        for new in seed::experience() {
            experience_repository_postgres::new_active_model(new)
                .map_err(seed_err)?
                .insert(db)
                .await
                .map_err(seed_err)?;
        }
        info!("Seeded experience table");
    }

    if projects::Entity::find().count(db).await.map_err(seed_err)? == 0 {
        for new in seed::projects() {
            project_repository_postgres::new_active_model(new)
                .map_err(seed_err)?
                .insert(db)
                .await
                .map_err(seed_err)?;
        }
        info!("Seeded projects table");
    }

    if blog_posts::Entity::find().count(db).await.map_err(seed_err)? == 0 {
        for (new, created_at) in seed::blog_posts() {
            blog_post_repository_postgres::new_active_model(new, created_at)
                .map_err(seed_err)?
                .insert(db)
                .await
                .map_err(seed_err)?;
        }
        info!("Seeded blog_posts table");
    }

    Ok(())
}
