use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact::application::ports::incoming::use_cases::CreateContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = NewContactMessage,
    responses(
        (status = 201, description = "Message stored", body = ContactMessage),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn create_contact_message_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new = match NewContactMessage::from_json(&body) {
        Ok(new) => new,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.contact.create.execute(new).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateContactMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
