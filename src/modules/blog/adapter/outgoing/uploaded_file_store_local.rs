use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::modules::blog::application::ports::outgoing::{
    FileStoreError, StoredFile, UploadedFileStore,
};

const FALLBACK_FILE_NAME: &str = "upload.docx";
const MAX_NAME_ATTEMPTS: i64 = 16;

/// Keeps uploaded originals as `<dir>/<epoch-millis>-<name>`.
#[derive(Debug, Clone)]
pub struct UploadedFileStoreLocal {
    dir: PathBuf,
}

impl UploadedFileStoreLocal {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Base name only, whitespace runs replaced by `-`.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let name = base.split_whitespace().collect::<Vec<_>>().join("-");

    if name.is_empty() || name == "." || name == ".." {
        FALLBACK_FILE_NAME.to_string()
    } else {
        name
    }
}

fn io_err(e: std::io::Error) -> FileStoreError {
    FileStoreError::Io(e.to_string())
}

/// Writes `bytes` to a freshly created file; a failed write removes the
/// partial file before the error is returned.
async fn write_or_discard<W>(mut writer: W, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %remove_err, "failed to remove partial upload");
        }
        return Err(io_err(e));
    }
    Ok(())
}

#[async_trait]
impl UploadedFileStore for UploadedFileStoreLocal {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, FileStoreError> {
        fs::create_dir_all(&self.dir).await.map_err(io_err)?;

        let name = sanitize_file_name(original_name);
        let stamp = Utc::now().timestamp_millis();

        // Same name in the same millisecond: move to the next free stamp.
        for offset in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(format!("{}-{}", stamp + offset, name));

            let file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(io_err(e)),
            };

            write_or_discard(file, &path, bytes).await?;

            debug!(path = %path.display(), size = bytes.len(), "stored upload");
            return Ok(StoredFile {
                path: path.to_string_lossy().into_owned(),
                original_name: original_name.to_string(),
            });
        }

        Err(FileStoreError::Io(format!(
            "no free file name for {name} in {}",
            self.dir.display()
        )))
    }

    async fn remove(&self, path: &str) -> Result<(), FileStoreError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(e)),
        }
    }

    async fn exists(&self, path: &str) -> bool {
        fs::metadata(path).await.is_ok()
    }
}
