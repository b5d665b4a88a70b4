pub mod app_state_builder;
pub mod docx_fixture;
pub mod fixtures;
pub mod multipart;
pub mod stubs;
