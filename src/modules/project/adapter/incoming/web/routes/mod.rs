mod create_project;
mod get_featured_projects;
mod get_projects;

pub use create_project::*;
pub use get_featured_projects::*;
pub use get_projects::*;
