pub mod create_contact_message;
pub mod get_contact_messages;
pub mod mark_contact_message_read;

pub use create_contact_message::{CreateContactMessageError, CreateContactMessageUseCase};
pub use get_contact_messages::{GetContactMessagesError, GetContactMessagesUseCase};
pub use mark_contact_message_read::{MarkContactMessageReadError, MarkContactMessageReadUseCase};
