//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Exact request bodies with their known ids and scores
//! - **Generators**: Proptest strategies for valid and invalid field text
//! - **Fixtures**: A processor plus the sample receipts used across tests
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the identity derivation and the scoring rules:
//!
//! ```rust
//! use receipt_points_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, id) in verify_all_vectors() {
//!     assert!(matches, "{name} produced {id}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::ReceiptParams;
//!
//! proptest! {
//!     #[test]
//!     fn generated_receipts_validate(params: ReceiptParams) {
//!         prop_assert!(receipt_points::core::is_valid_receipt(&params.to_receipt()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receipt_points_testkit::fixtures::{target_receipt, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let id = fixture.submit(&target_receipt()).unwrap();
//! assert_eq!(fixture.points(id), Some(28));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{corner_market_receipt, target_receipt, TestFixture};
pub use generators::ReceiptParams;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
