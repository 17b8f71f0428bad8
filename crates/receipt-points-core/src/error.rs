//! Error types for the receipt points core.

use thiserror::Error;

use crate::grammar::Field;

/// Errors raised while turning raw bytes into a candidate receipt.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload of {size} bytes exceeds the limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("malformed receipt json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A receipt that parsed but does not satisfy the field grammars.
///
/// The field is carried for diagnostics only. Callers at the transport
/// boundary treat every variant the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` does not match its grammar")]
    Field(Field),

    #[error("item {index}: field `{field}` does not match its grammar")]
    Item { index: usize, field: Field },
}
