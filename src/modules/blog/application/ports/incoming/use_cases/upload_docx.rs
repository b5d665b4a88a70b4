use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::domain::upload_policy::UploadPolicy;

/// Rejections raised before anything is stored or extracted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadDocxCommandError {
    #[error("Only .docx files are allowed")]
    InvalidFileType,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Uploaded file is empty")]
    EmptyFile,

    #[error("Invalid file name")]
    InvalidFileName,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadDocxError {
    #[error("document contains no text")]
    EmptyDocument,

    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    DocumentTooLarge(String),

    #[error("file storage failed: {0}")]
    StorageFailed(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct UploadDocxCommand {
    file_name: String,
    bytes: Vec<u8>,
}

fn sanitize_basename(file_name: &str, max_len: usize) -> Result<String, UploadDocxCommandError> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .ok_or(UploadDocxCommandError::InvalidFileName)?;

    if base.is_empty() || base.len() > max_len || base.chars().any(char::is_control) {
        return Err(UploadDocxCommandError::InvalidFileName);
    }

    Ok(base.to_string())
}

impl UploadDocxCommand {
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, UploadDocxCommandError> {
        let mime = content_type.unwrap_or_default();
        if !policy.allows_mime(&mime) {
            return Err(UploadDocxCommandError::InvalidFileType);
        }

        let actual_bytes = bytes.len() as u64;
        if actual_bytes > policy.max_file_size_bytes {
            return Err(UploadDocxCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes,
            });
        }
        if bytes.is_empty() {
            return Err(UploadDocxCommandError::EmptyFile);
        }

        let file_name = sanitize_basename(
            file_name.as_deref().unwrap_or_default(),
            policy.max_file_name_len,
        )?;

        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocxResult {
    pub post: BlogPost,
    /// Characters of plain text pulled out of the document.
    pub extracted_length: usize,
}

#[async_trait]
pub trait UploadDocxUseCase: Send + Sync {
    async fn execute(&self, command: UploadDocxCommand) -> Result<UploadDocxResult, UploadDocxError>;
}
