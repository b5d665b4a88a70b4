mod create_experience;
mod get_experience;

pub use create_experience::*;
pub use get_experience::*;
