use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::{FieldViolation, ValidationErrors};

/// Builds responses on the portfolio wire format: successful calls carry the
/// bare record or array, failures carry `{ "error": message, "code", "details"? }`.
pub struct ApiResponse;

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: message.to_string(),
            code: code.to_string(),
            details: None,
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    /// 400 with one entry per violated field.
    pub fn validation_failed(errors: ValidationErrors) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiError {
            error: errors.to_string(),
            code: "VALIDATION_ERROR".to_string(),
            details: Some(errors.into_violations()),
        })
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
