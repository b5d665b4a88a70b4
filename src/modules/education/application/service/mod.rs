pub mod create_education_service;
pub mod get_education_service;

pub use create_education_service::CreateEducationService;
pub use get_education_service::GetEducationService;
