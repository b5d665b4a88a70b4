pub mod blog_post_query;
pub mod blog_post_repository;
pub mod document_extractor;
pub mod uploaded_file_store;

pub use blog_post_query::{BlogPostQuery, BlogPostQueryError};
pub use blog_post_repository::{BlogPostRepository, BlogPostRepositoryError};
pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use uploaded_file_store::{FileStoreError, StoredFile, UploadedFileStore};
