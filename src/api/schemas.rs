use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldViolation;

/// Error body returned by every failing API call
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Only .docx files are allowed")]
    pub error: String,

    /// Error code for programmatic handling
    #[schema(example = "INVALID_FILE_TYPE")]
    pub code: String,

    /// Per-field violations, present on `VALIDATION_ERROR`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}
