use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = Vec<Project>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetProjectsError::RepositoryError(e)) => {
            error!("Repository error fetching projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
