use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::adapter::incoming::web::routes::PostActionResponse;
use crate::modules::blog::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post and its uploaded file removed", body = PostActionResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[delete("/api/blog/{id}")]
pub async fn delete_post_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog.delete.execute(id).await {
        Ok(post) => ApiResponse::success(PostActionResponse {
            message: "Post deleted successfully".to_string(),
            post,
        }),
        Err(DeletePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
        }
        Err(DeletePostError::RepositoryError(e)) => {
            error!("Repository error deleting post {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
