use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::education::application::ports::incoming::use_cases::CreateEducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/education",
    tag = "education",
    request_body = NewEducation,
    responses(
        (status = 201, description = "Education entry created", body = Education),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/education")]
pub async fn create_education_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new = match NewEducation::from_json(&body) {
        Ok(new) => new,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.education.create.execute(new).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateEducationError::RepositoryError(e)) => {
            error!("Repository error creating education: {}", e);
            ApiResponse::internal_error()
        }
    }
}
