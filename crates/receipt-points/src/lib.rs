//! # Receipt Points
//!
//! The unified API for scoring purchase receipts and recalling their scores
//! by content id.
//!
//! ## Overview
//!
//! - **Validation**: Every field of a submitted receipt must match a fixed grammar
//! - **Scoring**: A fixed rule set turns a valid receipt into a point total
//! - **Identity**: The id of a submission is derived from its exact bytes
//! - **Memoization**: Scores are stored once per id and never change
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points::{Points, Processor, ProcessError};
//!
//! let processor: Processor = Processor::default();
//!
//! let raw = br#"{"retailer":"M&M Corner Market","purchaseDate":"2022-03-20",
//!     "purchaseTime":"14:33","items":[{"shortDescription":"Gatorade","price":"2.25"},
//!     {"shortDescription":"Gatorade","price":"2.25"},{"shortDescription":"Gatorade","price":"2.25"},
//!     {"shortDescription":"Gatorade","price":"2.25"}],"total":"9.00"}"#;
//!
//! let id = processor.process(raw).unwrap();
//! assert_eq!(processor.lookup(&id.to_string()).unwrap(), Points::new(109));
//!
//! // Ids that were never issued, or are not ids at all, are unknown.
//! assert!(matches!(processor.lookup("nope"), Err(ProcessError::UnknownIdentity)));
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Grammars, validation, scoring, identity
//! - `receipt_points::store` - Score storage

pub mod error;
pub mod processor;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

pub use error::{ProcessError, Result};
pub use processor::{Processor, ProcessorConfig, DEFAULT_MAX_BODY_BYTES};

// Re-export commonly used core types
pub use receipt_points_core::{
    LineItem, ParseError, Points, Receipt, ReceiptBuilder, ReceiptId, ValidationError,
};
pub use receipt_points_store::{MemoryStore, PointsStore};
