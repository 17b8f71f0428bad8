//! Store trait: the abstract interface for score storage.
//!
//! This trait allows the processor to be storage-agnostic. The shipped
//! implementation is [`MemoryStore`](crate::MemoryStore).

use receipt_points_core::{Points, ReceiptId};

/// Result of inserting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// The score was stored.
    Inserted,
    /// A score already exists for this id (idempotent - not an error).
    AlreadyExists {
        /// The score that was kept.
        existing: Points,
    },
}

/// Outcome of [`PointsStoreExt::get_or_compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// This call computed the score and its value was stored.
    Computed(Points),
    /// A score was already stored; any value computed by this call was dropped.
    Cached(Points),
}

/// The PointsStore trait: interface for score storage.
///
/// # Design Notes
///
/// - **Write once**: A stored score is never replaced. `insert` on an id
///   that already has a score returns `AlreadyExists` and changes nothing.
/// - **Atomic per id**: Each call is a single critical section. No
///   coordination across distinct ids is required.
/// - **Never blocks on I/O**: Implementations hold locks only for map access.
pub trait PointsStore: Send + Sync {
    /// Store a score for `id` unless one is already present.
    fn insert(&self, id: ReceiptId, points: Points) -> InsertResult;

    /// Get the score stored for `id`.
    fn get(&self, id: &ReceiptId) -> Option<Points>;

    /// Check whether a score is stored for `id`.
    fn contains(&self, id: &ReceiptId) -> bool {
        self.get(id).is_some()
    }

    /// Number of stored scores.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extension trait for common store patterns.
pub trait PointsStoreExt: PointsStore {
    /// Return the stored score for `id`, computing and storing it if absent.
    ///
    /// `compute` runs outside any lock. When two callers race on the same
    /// id, both may compute, but only the first insert is kept and both
    /// observe that value.
    fn get_or_compute<F>(&self, id: &ReceiptId, compute: F) -> Entry
    where
        F: FnOnce() -> Points;
}

impl<S: PointsStore + ?Sized> PointsStoreExt for S {
    fn get_or_compute<F>(&self, id: &ReceiptId, compute: F) -> Entry
    where
        F: FnOnce() -> Points,
    {
        if let Some(points) = self.get(id) {
            return Entry::Cached(points);
        }

        let points = compute();
        match self.insert(*id, points) {
            InsertResult::Inserted => Entry::Computed(points),
            InsertResult::AlreadyExists { existing } => Entry::Cached(existing),
        }
    }
}
