use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new = match NewProject::from_json(&body) {
        Ok(new) => new,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.project.create.execute(new).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
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

    use crate::modules::project::application::ports::incoming::use_cases::CreateProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock Create Project Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<Project, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(&self, new: NewProject) -> Result<Project, CreateProjectError> {
            self.result.clone().map(|p| new.into_project(p.id))
        }
    }

    fn base_create_request() -> Value {
        json!({
            "title": "My Project",
            "description": "desc",
            "technologies": ["Rust"],
            "liveUrl": "https://example.com",
            "id": 42,
            "createdAt": "2020-01-01T00:00:00Z"
        })
    }

    /* --------------------------------------------------
     * Success Case
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_success() {
        let seed = NewProject::from_json(&base_create_request())
            .unwrap()
            .into_project(5);
        let state = TestAppStateBuilder::default()
            .with_create_project(MockCreateProjectUseCase { result: Ok(seed) })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_project_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(base_create_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 5);
        assert_eq!(body["title"], "My Project");
        assert_eq!(body["featured"], false);
        assert!(body.get("createdAt").is_none());
    }

    /* --------------------------------------------------
     * Error Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_project_missing_technologies() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(create_project_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "title": "x", "description": "y" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "technologies");
    }

    #[actix_web::test]
    async fn test_create_project_repository_error() {
        let state = TestAppStateBuilder::default()
            .with_create_project(MockCreateProjectUseCase {
                result: Err(CreateProjectError::RepositoryError("db".to_string())),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_project_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(base_create_request())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
