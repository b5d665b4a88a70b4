mod create_post;
mod delete_post;
mod get_admin_posts;
mod get_post_by_slug;
mod get_published_posts;
mod toggle_publish;
mod upload_docx;

pub use create_post::*;
pub use delete_post::*;
pub use get_admin_posts::*;
pub use get_post_by_slug::*;
pub use get_published_posts::*;
pub use toggle_publish::*;
pub use upload_docx::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::entities::BlogPost;

/// Body of publish-toggle and delete responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostActionResponse {
    pub message: String,
    pub post: BlogPost,
}
