pub mod create_post;
pub mod delete_post;
pub mod get_admin_posts;
pub mod get_post_by_slug;
pub mod get_published_posts;
pub mod toggle_publish;
pub mod upload_docx;

pub use create_post::{CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_admin_posts::{GetAdminPostsError, GetAdminPostsUseCase};
pub use get_post_by_slug::{GetPostBySlugError, GetPostBySlugUseCase};
pub use get_published_posts::{GetPublishedPostsError, GetPublishedPostsUseCase};
pub use toggle_publish::{TogglePublishError, TogglePublishUseCase};
pub use upload_docx::{
    UploadDocxCommand, UploadDocxCommandError, UploadDocxError, UploadDocxResult,
    UploadDocxUseCase,
};
