use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::GetPostBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Post slug, case-sensitive")),
    responses(
        (status = 200, description = "The post", body = BlogPost),
        (status = 404, description = "No post with that slug", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get_by_slug.execute(&slug).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostBySlugError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
        }
        Err(GetPostBySlugError::RepositoryError(e)) => {
            error!("Repository error fetching post '{}': {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
