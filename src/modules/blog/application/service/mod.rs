pub mod create_post_service;
pub mod delete_post_service;
pub mod get_admin_posts_service;
pub mod get_post_by_slug_service;
pub mod get_published_posts_service;
pub mod toggle_publish_service;
pub mod upload_docx_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_admin_posts_service::GetAdminPostsService;
pub use get_post_by_slug_service::GetPostBySlugService;
pub use get_published_posts_service::GetPublishedPostsService;
pub use toggle_publish_service::TogglePublishService;
pub use upload_docx_service::UploadDocxService;
