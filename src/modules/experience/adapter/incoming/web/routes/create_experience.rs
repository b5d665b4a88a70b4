use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/experience",
    tag = "experience",
    request_body = NewExperience,
    responses(
        (status = 201, description = "Experience entry created", body = Experience),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/experience")]
pub async fn create_experience_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new = match NewExperience::from_json(&body) {
        Ok(new) => new,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.experience.create.execute(new).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct EchoCreateExperience;

    #[async_trait]
    impl CreateExperienceUseCase for EchoCreateExperience {
        async fn execute(&self, new: NewExperience) -> Result<Experience, CreateExperienceError> {
            Ok(new.into_experience(4))
        }
    }

    #[actix_web::test]
    async fn test_create_experience_applies_defaults() {
        let state = TestAppStateBuilder::default()
            .with_create_experience(EchoCreateExperience)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experience")
            .set_json(json!({
                "title": "Dev",
                "company": "Acme",
                "location": "Remote",
                "startDate": "2020-01",
                "description": "Built things",
                "technologies": ["Rust", "Postgres"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 4);
        assert_eq!(body["isCurrentJob"], false);
        assert_eq!(body["technologies"], json!(["Rust", "Postgres"]));
    }

    #[actix_web::test]
    async fn test_create_experience_rejects_non_object_body() {
        let state = TestAppStateBuilder::default()
            .with_create_experience(EchoCreateExperience)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/experience")
            .set_json(json!("just a string"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "$");
    }
}
