use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Clients match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Clients should match on `code` from `{"code": "NOT_FOUND", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ALREADY_REGISTERED: &str = "ALREADY_REGISTERED";
    pub const STOCK_EXCEEDED: &str = "STOCK_EXCEEDED";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to a stable error code (see [`error_code`]) and an
/// HTTP status code. The JSON response always includes both:
///
/// ```json
/// {"code": "NOT_FOUND", "message": "coffee with id 7 not found"}
/// ```
///
/// All variants are terminal and synchronous; nothing is retried.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// A record with the same unique name already exists. HTTP 400.
    #[error("{0}")]
    AlreadyRegistered(String),

    /// An increment would push quantity past the stock ceiling. HTTP 400.
    #[error("{0}")]
    StockExceeded(String),

    /// Input data is malformed or out of range. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Storage backend failure. HTTP 500.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::AlreadyRegistered(_) => error_code::ALREADY_REGISTERED,
            ServiceError::StockExceeded(_) => error_code::STOCK_EXCEEDED,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Storage(_) => error_code::STORAGE_ERROR,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// HTTP status code for this error.
    ///
    /// `AlreadyRegistered` and `StockExceeded` are business-rule
    /// rejections of well-formed requests; both report as 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AlreadyRegistered(_) => StatusCode::BAD_REQUEST,
            ServiceError::StockExceeded(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
