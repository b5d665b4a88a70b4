mod create_education;
mod get_education;

pub use create_education::*;
pub use get_education::*;
