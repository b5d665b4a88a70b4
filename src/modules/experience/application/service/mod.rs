pub mod create_experience_service;
pub mod get_experience_service;

pub use create_experience_service::CreateExperienceService;
pub use get_experience_service::GetExperienceService;
