#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    /// Multipart field carrying the document.
    pub const FORM_FIELD: &'static str = "docx";
    pub const DOCX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[Self::DOCX_MIME];

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    pub fn allows_mime(&self, mime: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime.trim()))
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}
