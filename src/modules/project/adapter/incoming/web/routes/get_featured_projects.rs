use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Projects flagged as featured", body = Vec<Project>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_featured.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetProjectsError::RepositoryError(e)) => {
            error!("Repository error fetching featured projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
