use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::application::domain::entities::BlogPostAdminView;
use crate::modules::blog::application::ports::incoming::use_cases::GetAdminPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/blog/admin",
    tag = "blog",
    responses(
        (status = 200, description = "All posts including drafts", body = Vec<BlogPostAdminView>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/api/blog/admin")]
pub async fn get_admin_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_admin.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetAdminPostsError::RepositoryError(e)) => {
            error!("Repository error fetching admin posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
