#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("file is not a valid docx archive: {0}")]
    NotADocx(String),

    #[error("docx archive has no main document part")]
    MissingMainDocument,

    #[error("main document part is malformed: {0}")]
    MalformedXml(String),

    #[error("main document part expands beyond {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Turns an uploaded document into plain text, one line per paragraph.
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}
