use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::incoming::use_cases::GetPublishedPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<BlogPost>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/blog")]
pub async fn get_published_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_published.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetPublishedPostsError::RepositoryError(e)) => {
            error!("Repository error fetching published posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
