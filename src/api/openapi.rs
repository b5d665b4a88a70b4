use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::adapter::incoming::web::routes::{
    PostActionResponse, UploadDocxResponse,
};
use crate::modules::blog::application::domain::entities::{
    BlogPost, BlogPostAdminView, NewBlogPost,
};
use crate::modules::contact::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::education::application::domain::entities::{Education, NewEducation};
use crate::modules::experience::application::domain::entities::{Experience, NewExperience};
use crate::modules::project::application::domain::entities::{NewProject, Project};
use crate::shared::validation::FieldViolation;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Education, experience, projects, blog and contact endpoints of a personal portfolio"
    ),
    paths(
        // Education
        crate::modules::education::adapter::incoming::web::routes::get_education_handler,
        crate::modules::education::adapter::incoming::web::routes::create_education_handler,

        // Experience
        crate::modules::experience::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,

        // Blog
        crate::modules::blog::adapter::incoming::web::routes::get_published_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_admin_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_post_by_slug_handler,
        crate::modules::blog::adapter::incoming::web::routes::create_post_handler,
        crate::modules::blog::adapter::incoming::web::routes::upload_docx_handler,
        crate::modules::blog::adapter::incoming::web::routes::toggle_publish_handler,
        crate::modules::blog::adapter::incoming::web::routes::delete_post_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::get_contact_messages_handler,
        crate::modules::contact::adapter::incoming::web::routes::create_contact_message_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_contact_message_read_handler,
    ),
    components(
        schemas(
            // Error body
            ErrorResponse,
            FieldViolation,

            Education,
            NewEducation,
            Experience,
            NewExperience,
            Project,
            NewProject,
            BlogPost,
            BlogPostAdminView,
            NewBlogPost,
            PostActionResponse,
            UploadDocxResponse,
            ContactMessage,
            NewContactMessage,
        )
    ),
    tags(
        (name = "education", description = "Academic background"),
        (name = "experience", description = "Work history"),
        (name = "projects", description = "Portfolio projects"),
        (name = "blog", description = "Blog posts and DOCX import"),
        (name = "contact", description = "Contact form inbox"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
