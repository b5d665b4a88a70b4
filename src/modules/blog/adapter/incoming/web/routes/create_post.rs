use actix_web::{post, web, Responder};
use serde_json::Value;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::application::domain::entities::{BlogPost, NewBlogPost};
use crate::modules::blog::application::ports::incoming::use_cases::CreatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/blog")]
pub async fn create_post_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let new = match NewBlogPost::from_json(&body) {
        Ok(new) => new,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.blog.create.execute(new).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreatePostError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "A post with this slug already exists")
        }
        Err(CreatePostError::RepositoryError(e)) => {
            error!("Repository error creating post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubCreatePostUseCase;

    fn base_create_request() -> Value {
        json!({
            "title": "Hello",
            "slug": "hello",
            "content": "Body text",
            "tags": ["Rust"],
            "updatedAt": "2000-01-01T00:00:00Z"
        })
    }

    #[actix_web::test]
    async fn test_create_post_success() {
        let created = NewBlogPost::from_json(&base_create_request())
            .unwrap()
            .into_post(9, Utc::now());
        let state = TestAppStateBuilder::default()
            .with_create_post(StubCreatePostUseCase {
                result: Ok(created),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(create_post_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/blog")
            .set_json(base_create_request())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 9);
        assert_eq!(body["published"], false);
        assert_eq!(body["tags"][0], "Rust");
    }

    #[actix_web::test]
    async fn test_create_post_duplicate_slug() {
        let state = TestAppStateBuilder::default()
            .with_create_post(StubCreatePostUseCase {
                result: Err(CreatePostError::SlugAlreadyExists),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(create_post_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/blog")
            .set_json(base_create_request())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "SLUG_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_create_post_collects_all_violations() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(state).service(create_post_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/blog")
            .set_json(json!({ "slug": "Bad Slug", "published": "yes" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"content"));
        assert!(fields.contains(&"published"));
    }
}
