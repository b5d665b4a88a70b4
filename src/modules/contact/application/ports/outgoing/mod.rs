pub mod contact_message_repository;

pub use contact_message_repository::{ContactMessageRepository, ContactMessageRepositoryError};
