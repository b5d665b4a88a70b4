pub mod in_memory;
pub mod postgres;
pub mod seed;

pub use in_memory::{Collection, InMemoryStore};

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("failed to connect to database: {0}")]
    Connect(String),

    #[error("failed to run migrations: {0}")]
    Migration(String),

    #[error("failed to seed sample data: {0}")]
    Seed(String),
}

/// The backend chosen at startup. Adapters are built from it.
#[derive(Clone)]
pub enum StorageHandle {
    InMemory(Arc<InMemoryStore>),
    Postgres(Arc<DatabaseConnection>),
}

impl StorageHandle {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StorageHandle::InMemory(_) => "memory",
            StorageHandle::Postgres(_) => "postgres",
        }
    }

    /// Round trip to the backing store.
    pub async fn ping(&self) -> bool {
        match self {
            StorageHandle::InMemory(_) => true,
            StorageHandle::Postgres(db) => db
                .execute(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1",
                ))
                .await
                .is_ok(),
        }
    }
}
