use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::GetContactMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Inbox, most recent first", body = Vec<ContactMessage>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn get_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get_list.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetContactMessagesError::RepositoryError(e)) => {
            error!("Repository error fetching contact messages: {}", e);
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
    async fn test_get_contact_messages_empty_inbox() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_contact_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!([]));
    }
}
