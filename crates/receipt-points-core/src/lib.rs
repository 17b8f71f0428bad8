//! # Receipt Points Core
//!
//! Pure primitives for receipt points: field grammars, structural validation,
//! scoring, and content-addressed identity.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A candidate receipt decoded from untrusted JSON
//! - [`ValidReceipt`] - A receipt whose fields all matched their grammars
//! - [`ReceiptId`] - Content-addressed identifier of a raw submission
//! - [`Points`] - A reward point total
//! - [`Field`] - The grammar table, one entry per field kind
//!
//! ## Flow
//!
//! ```rust
//! use receipt_points_core::{score, validate_receipt, Points, Receipt, ReceiptId};
//!
//! let raw = br#"{"retailer":"Target","purchaseDate":"2022-01-01",
//!     "purchaseTime":"13:01","items":[],"total":"1.00"}"#;
//!
//! let receipt = Receipt::from_json(raw).unwrap();
//! let valid = validate_receipt(&receipt).unwrap();
//! assert_eq!(score(&valid), Points::new(6 + 50 + 25 + 6));
//!
//! let id = ReceiptId::derive(raw);
//! assert_eq!(id, ReceiptId::derive(raw));
//! ```

pub mod error;
pub mod grammar;
pub mod receipt;
pub mod scoring;
pub mod types;
pub mod validation;

pub use error::{ParseError, ValidationError};
pub use grammar::Field;
pub use receipt::{
    Amount, LineItem, PurchaseDate, PurchaseTime, Receipt, ReceiptBuilder, ValidItem,
    ValidReceipt,
};
pub use scoring::{breakdown, score, ScoreBreakdown};
pub use types::{Points, ReceiptId};
pub use validation::{is_valid_receipt, validate_item, validate_receipt};
