//! # Receipt Points Store
//!
//! Storage abstraction for computed scores. Provides a trait-based interface
//! keyed by [`ReceiptId`](receipt_points_core::ReceiptId), with an in-memory
//! implementation.
//!
//! ## Key Types
//!
//! - [`PointsStore`] - The trait for all storage operations
//! - [`PointsStoreExt`] - `get_or_compute` on top of any store
//! - [`MemoryStore`] - Process-lifetime, lock-guarded storage
//! - [`InsertResult`] - Result of inserting a score
//! - [`Entry`] - Whether `get_or_compute` ran the computation
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points_core::{Points, ReceiptId};
//! use receipt_points_store::{Entry, MemoryStore, PointsStore, PointsStoreExt};
//!
//! let store = MemoryStore::new();
//! let id = ReceiptId::derive(b"{}");
//!
//! let first = store.get_or_compute(&id, || Points::new(28));
//! assert_eq!(first, Entry::Computed(Points::new(28)));
//!
//! let second = store.get_or_compute(&id, || unreachable!());
//! assert_eq!(second, Entry::Cached(Points::new(28)));
//! assert_eq!(store.get(&id), Some(Points::new(28)));
//! ```
//!
//! ## Design Notes
//!
//! - **Idempotent inserts**: Inserting for an existing id returns `AlreadyExists`
//!   with the stored value and leaves it untouched
//! - **First writer wins**: Racing computations for one id keep exactly one value
//! - **No eviction**: Entries live as long as the store

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::{Entry, InsertResult, PointsStore, PointsStoreExt};
