use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{http::StatusCode, post, web, HttpRequest, HttpResponse, Responder};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::domain::upload_policy::UploadPolicy;
use crate::modules::blog::application::ports::incoming::use_cases::{
    UploadDocxCommand, UploadDocxCommandError, UploadDocxError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocxResponse {
    pub message: String,
    pub post: BlogPost,
    pub extracted_length: usize,
}

struct ReceivedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

enum ReadUploadError {
    NoFile,
    Multipart(MultipartError),
    Rejected(UploadDocxCommandError),
}

impl From<MultipartError> for ReadUploadError {
    fn from(e: MultipartError) -> Self {
        ReadUploadError::Multipart(e)
    }
}

async fn read_field(
    field: &mut Field,
    policy: &UploadPolicy,
) -> Result<ReceivedFile, ReadUploadError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_string);
    let content_type = field.content_type().map(|m| m.essence_str().to_string());

    // Type is checked before the body is buffered.
    if !content_type
        .as_deref()
        .is_some_and(|mime| policy.allows_mime(mime))
    {
        return Err(ReadUploadError::Rejected(
            UploadDocxCommandError::InvalidFileType,
        ));
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        let received = (bytes.len() + chunk.len()) as u64;
        if received > policy.max_file_size_bytes {
            return Err(ReadUploadError::Rejected(
                UploadDocxCommandError::FileTooLarge {
                    max_bytes: policy.max_file_size_bytes,
                    actual_bytes: received,
                },
            ));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(ReceivedFile {
        file_name,
        content_type,
        bytes,
    })
}

/// First part named `docx`; other parts are skipped.
async fn read_upload(
    payload: &mut Multipart,
    policy: &UploadPolicy,
) -> Result<ReceivedFile, ReadUploadError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() == Some(UploadPolicy::FORM_FIELD) {
            return read_field(&mut field, policy).await;
        }
        while field.try_next().await?.is_some() {}
    }

    Err(ReadUploadError::NoFile)
}

#[utoipa::path(
    post,
    path = "/api/blog/upload",
    tag = "blog",
    request_body(content_type = "multipart/form-data", description = "Form field `docx` holding a .docx file (max 10 MB)"),
    responses(
        (status = 201, description = "Draft post created from the document", body = UploadDocxResponse),
        (status = 400, description = "Missing file, wrong type, too large or empty document", body = ErrorResponse),
        (status = 500, description = "Extraction or storage failure", body = ErrorResponse),
    )
)]
#[post("/api/blog/upload")]
pub async fn upload_docx_handler(
    req: HttpRequest,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = &data.upload_policy;
    let mut multipart = Multipart::new(req.headers(), payload);

    let received = match read_upload(&mut multipart, policy).await {
        Ok(received) => received,
        Err(ReadUploadError::NoFile) => {
            return ApiResponse::bad_request("NO_FILE", "No file uploaded");
        }
        Err(ReadUploadError::Multipart(e)) => {
            warn!("Malformed multipart upload: {}", e);
            return ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body");
        }
        Err(ReadUploadError::Rejected(e)) => return map_command_error(e),
    };

    let command = match UploadDocxCommand::new(
        received.file_name,
        received.content_type,
        received.bytes,
        policy,
    ) {
        Ok(command) => command,
        Err(e) => return map_command_error(e),
    };

    match data.blog.upload_docx.execute(command).await {
        Ok(result) => ApiResponse::created(UploadDocxResponse {
            message: "Article created successfully from DOCX file".to_string(),
            post: result.post,
            extracted_length: result.extracted_length,
        }),
        Err(UploadDocxError::EmptyDocument) => ApiResponse::bad_request(
            "EMPTY_DOCUMENT",
            "The document does not contain any readable text",
        ),
        Err(UploadDocxError::DocumentTooLarge(e)) => {
            warn!("Rejected oversized document: {}", e);
            ApiResponse::bad_request("DOCUMENT_TOO_LARGE", "The document text is too large to import")
        }
        Err(UploadDocxError::ExtractionFailed(e)) => {
            error!("Text extraction failed: {}", e);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXTRACTION_FAILED",
                "Failed to process DOCX file",
            )
        }
        Err(UploadDocxError::StorageFailed(e)) => {
            error!("Storing uploaded file failed: {}", e);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "Failed to store uploaded file",
            )
        }
        Err(UploadDocxError::RepositoryError(e)) => {
            error!("Repository error creating post from upload: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(e: UploadDocxCommandError) -> HttpResponse {
    match e {
        UploadDocxCommandError::InvalidFileType => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only .docx files are allowed")
        }
        UploadDocxCommandError::FileTooLarge {
            max_bytes,
            actual_bytes,
        } => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!(
                "File too large (max {} bytes, got {} bytes)",
                max_bytes, actual_bytes
            ),
        ),
        UploadDocxCommandError::EmptyFile => {
            ApiResponse::bad_request("EMPTY_FILE", "Uploaded file is empty")
        }
        UploadDocxCommandError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
        }
    }
}
