use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::GetEducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    responses(
        (status = 200, description = "Education entries, newest first", body = Vec<Education>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.get_list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetEducationError::RepositoryError(e)) => {
            error!("Repository error fetching education: {}", e);
            ApiResponse::internal_error()
        }
    }
}
