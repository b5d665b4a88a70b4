use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("file store io error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: String,
    pub original_name: String,
}

#[async_trait]
pub trait UploadedFileStore: Send + Sync {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, FileStoreError>;

    /// Removing a file that is already gone is not an error.
    async fn remove(&self, path: &str) -> Result<(), FileStoreError>;

    async fn exists(&self, path: &str) -> bool;
}
