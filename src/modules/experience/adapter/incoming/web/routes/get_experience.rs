use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "Work history, most recent first", body = Vec<Experience>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetExperienceError::RepositoryError(e)) => {
            error!("Repository error fetching experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
