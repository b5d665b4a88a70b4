pub mod create_contact_message_service;
pub mod get_contact_messages_service;
pub mod mark_contact_message_read_service;

pub use create_contact_message_service::CreateContactMessageService;
pub use get_contact_messages_service::GetContactMessagesService;
pub use mark_contact_message_read_service::MarkContactMessageReadService;
