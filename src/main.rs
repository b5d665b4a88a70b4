pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod presentation;
pub mod shared;
pub mod storage;

use crate::config::{AppConfig, StorageBackend};
use crate::modules::blog::adapter::outgoing::{
    BlogPostQueryMemory, BlogPostQueryPostgres, BlogPostRepositoryMemory,
    BlogPostRepositoryPostgres, DocxTextExtractor, UploadedFileStoreLocal,
};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::domain::upload_policy::UploadPolicy;
use crate::modules::blog::application::ports::outgoing::{DocumentExtractor, UploadedFileStore};
use crate::modules::contact::adapter::outgoing::{
    ContactMessageRepositoryMemory, ContactMessageRepositoryPostgres,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::education::adapter::outgoing::{
    EducationRepositoryMemory, EducationRepositoryPostgres,
};
use crate::modules::education::application::education_use_cases::EducationUseCases;
use crate::modules::experience::adapter::outgoing::{
    ExperienceRepositoryMemory, ExperienceRepositoryPostgres,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::project::adapter::outgoing::{ProjectRepositoryMemory, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::shared::api::custom_json_config;
use crate::storage::{InMemoryStore, StorageHandle};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub education: EducationUseCases,
    pub experience: ExperienceUseCases,
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub contact: ContactUseCases,
    pub upload_policy: UploadPolicy,
}

/// Wires every use case to the adapters of the selected backend.
pub fn build_app_state(
    storage: &StorageHandle,
    upload_dir: &Path,
    upload_policy: UploadPolicy,
) -> AppState {
    let files: Arc<dyn UploadedFileStore + Send + Sync> =
        Arc::new(UploadedFileStoreLocal::new(upload_dir));
    let extractor: Arc<dyn DocumentExtractor + Send + Sync> = Arc::new(DocxTextExtractor::new());

    match storage {
        StorageHandle::InMemory(store) => AppState {
            education: EducationUseCases::new(EducationRepositoryMemory::new(store.clone())),
            experience: ExperienceUseCases::new(ExperienceRepositoryMemory::new(store.clone())),
            project: ProjectUseCases::new(ProjectRepositoryMemory::new(store.clone())),
            blog: BlogUseCases::new(
                BlogPostQueryMemory::new(store.clone()),
                BlogPostRepositoryMemory::new(store.clone()),
                files,
                extractor,
            ),
            contact: ContactUseCases::new(ContactMessageRepositoryMemory::new(store.clone())),
            upload_policy,
        },
        StorageHandle::Postgres(db) => AppState {
            education: EducationUseCases::new(EducationRepositoryPostgres::new(db.clone())),
            experience: ExperienceUseCases::new(ExperienceRepositoryPostgres::new(db.clone())),
            project: ProjectUseCases::new(ProjectRepositoryPostgres::new(db.clone())),
            blog: BlogUseCases::new(
                BlogPostQueryPostgres::new(db.clone()),
                BlogPostRepositoryPostgres::new(db.clone()),
                files,
                extractor,
            ),
            contact: ContactUseCases::new(ContactMessageRepositoryPostgres::new(db.clone())),
            upload_policy,
        },
    }
}

#[cfg(not(tarpaulin_include))]
async fn open_storage(config: &AppConfig) -> anyhow::Result<StorageHandle> {
    match &config.storage {
        StorageBackend::Memory => {
            let store = if config.seed_sample_data {
                InMemoryStore::seeded()
            } else {
                InMemoryStore::empty()
            };
            Ok(StorageHandle::InMemory(Arc::new(store)))
        }
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let db = storage::postgres::connect(database_url, *max_connections).await?;
            if config.seed_sample_data {
                storage::postgres::seed_if_empty(&db).await?;
            }
            Ok(StorageHandle::Postgres(Arc::new(db)))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("cannot create upload dir {}", config.upload_dir.display()))?;

    let storage = open_storage(&config).await?;
    info!(
        backend = storage.backend_name(),
        upload_dir = %config.upload_dir.display(),
        "Storage ready"
    );

    let state = build_app_state(&storage, &config.upload_dir, config.upload_policy());
    let storage_data = web::Data::new(storage);

    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(storage_data.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
            .default_service(web::route().to(presentation::fallback))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Page + docs
    cfg.service(crate::presentation::index);
    cfg.service(crate::api::openapi::openapi_json);
    // Education
    cfg.service(crate::modules::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::modules::education::adapter::incoming::web::routes::create_education_handler);
    // Experience
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
    );
    // Projects
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
    );
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    // Blog: fixed segments before `{slug}`
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_admin_posts_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::upload_docx_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_published_posts_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::toggle_publish_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_post_by_slug_handler);
    // Contact
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::get_contact_messages_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::create_contact_message_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::mark_contact_message_read_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
