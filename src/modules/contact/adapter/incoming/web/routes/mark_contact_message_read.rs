use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::MarkContactMessageReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/api/contact/{id}/read",
    tag = "contact",
    params(("id" = i32, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Message marked read", body = ContactMessage),
        (status = 404, description = "No such message", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[patch("/api/contact/{id}/read")]
pub async fn mark_contact_message_read_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.mark_read.execute(id).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(MarkContactMessageReadError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Contact message not found")
        }
        Err(MarkContactMessageReadError::RepositoryError(e)) => {
            error!("Repository error marking message {} read: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_mark_read_not_found() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(mark_contact_message_read_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/contact/12/read")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "MESSAGE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_mark_read_rejects_non_numeric_id() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(mark_contact_message_read_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/contact/abc/read")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
