pub mod create_project;
pub mod get_featured_projects;
pub mod get_projects;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use get_featured_projects::GetFeaturedProjectsUseCase;
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
