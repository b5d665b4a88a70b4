pub mod education_repository;

pub use education_repository::{EducationRepository, EducationRepositoryError};
