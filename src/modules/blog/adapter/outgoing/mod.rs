pub mod blog_post_query_memory;
pub mod blog_post_query_postgres;
pub mod blog_post_repository_memory;
pub mod blog_post_repository_postgres;
pub mod docx_text_extractor;
pub mod sea_orm_entity;
pub mod uploaded_file_store_local;

pub use blog_post_query_memory::BlogPostQueryMemory;
pub use blog_post_query_postgres::BlogPostQueryPostgres;
pub use blog_post_repository_memory::BlogPostRepositoryMemory;
pub use blog_post_repository_postgres::BlogPostRepositoryPostgres;
pub use docx_text_extractor::DocxTextExtractor;
pub use uploaded_file_store_local::UploadedFileStoreLocal;
