//! Error types for the processor.

use receipt_points_core::{ParseError, ValidationError};
use thiserror::Error;

/// Errors that can occur during processor operations.
///
/// Every variant describes a problem with the caller's input. None of them
/// is transient, so retrying the same call yields the same error.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The bytes could not be decoded into the receipt shape.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] ParseError),

    /// The receipt decoded but a field failed its grammar.
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// No score is stored under the requested id.
    #[error("unknown receipt id")]
    UnknownIdentity,
}

impl ProcessError {
    /// Whether the error rejects a submission (as opposed to a lookup miss).
    pub fn is_invalid_receipt(&self) -> bool {
        matches!(
            self,
            ProcessError::MalformedInput(_) | ProcessError::ValidationFailed(_)
        )
    }
}

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
