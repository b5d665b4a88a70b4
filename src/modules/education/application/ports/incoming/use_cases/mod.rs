pub mod create_education;
pub mod get_education;

pub use create_education::{CreateEducationError, CreateEducationUseCase};
pub use get_education::{GetEducationError, GetEducationUseCase};
