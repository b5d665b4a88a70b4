mod create_contact_message;
mod get_contact_messages;
mod mark_contact_message_read;

pub use create_contact_message::*;
pub use get_contact_messages::*;
pub use mark_contact_message_read::*;
