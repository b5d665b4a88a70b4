pub mod create_experience;
pub mod get_experience;

pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use get_experience::{GetExperienceError, GetExperienceUseCase};
