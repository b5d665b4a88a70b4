use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::adapter::incoming::web::routes::PostActionResponse;
use crate::modules::blog::application::ports::incoming::use_cases::TogglePublishError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/api/blog/{id}/publish",
    tag = "blog",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Publish state flipped", body = PostActionResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[patch("/api/blog/{id}/publish")]
pub async fn toggle_publish_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blog.toggle_publish.execute(id).await {
        Ok(post) => {
            let message = if post.published {
                "Post published successfully"
            } else {
                "Post unpublished successfully"
            };
            ApiResponse::success(PostActionResponse {
                message: message.to_string(),
                post,
            })
        }
        Err(TogglePublishError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
        }
        Err(TogglePublishError::RepositoryError(e)) => {
            error!("Repository error toggling post {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
