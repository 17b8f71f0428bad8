//! API error types.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use receipt_points::ProcessError;
use thiserror::Error;

/// Body sent for any rejected submission.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid. Please verify input.";

/// Body sent when an id has no stored score.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid receipt: {0}")]
    InvalidReceipt(ProcessError),

    /// The body could not be read, including bodies over the size limit.
    #[error("unreadable body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("receipt not found")]
    NotFound,
}

impl From<ProcessError> for ApiError {
    fn from(e: ProcessError) -> Self {
        if e.is_invalid_receipt() {
            ApiError::InvalidReceipt(e)
        } else {
            ApiError::NotFound
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidReceipt(_) | ApiError::UnreadableBody(_) => {
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response()
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        }
    }
}

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;
