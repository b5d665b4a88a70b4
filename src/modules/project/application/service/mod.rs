pub mod create_project_service;
pub mod get_projects_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::{GetFeaturedProjectsService, GetProjectsService};
