//! In-memory implementation of the PointsStore trait.
//!
//! Keeps every score for the life of the process. Thread-safe via RwLock.

use std::collections::hash_map;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipt_points_core::{Points, ReceiptId};

use crate::traits::{InsertResult, PointsStore};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. A poisoned lock is recovered:
/// every write is a single map insert of an immutable value, so a panic in
/// another holder cannot leave a partial entry behind.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scores: RwLock<HashMap<ReceiptId, Points>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PointsStore for MemoryStore {
    fn insert(&self, id: ReceiptId, points: Points) -> InsertResult {
        let mut scores = self.write();

        match scores.entry(id) {
            hash_map::Entry::Occupied(entry) => {
                tracing::debug!(receipt_id = %id, "score already stored");
                InsertResult::AlreadyExists {
                    existing: *entry.get(),
                }
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(points);
                tracing::debug!(receipt_id = %id, %points, "score stored");
                InsertResult::Inserted
            }
        }
    }

    fn get(&self, id: &ReceiptId) -> Option<Points> {
        self.read().get(id).copied()
    }

    fn contains(&self, id: &ReceiptId) -> bool {
        self.read().contains_key(id)
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Entry, PointsStoreExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn make_id(n: u32) -> ReceiptId {
        ReceiptId::derive(format!("receipt {}", n).as_bytes())
    }

    #[test]
    fn test_memory_store_basic() {
        let store = MemoryStore::new();
        let id = make_id(1);

        assert!(store.is_empty());
        assert_eq!(store.insert(id, Points::new(28)), InsertResult::Inserted);
        assert_eq!(store.get(&id), Some(Points::new(28)));
        assert!(store.contains(&id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_idempotent() {
        let store = MemoryStore::new();
        let id = make_id(1);

        let r1 = store.insert(id, Points::new(28));
        assert_eq!(r1, InsertResult::Inserted);

        let r2 = store.insert(id, Points::new(99));
        assert_eq!(
            r2,
            InsertResult::AlreadyExists {
                existing: Points::new(28)
            }
        );
        assert_eq!(store.get(&id), Some(Points::new(28)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_unknown_id() {
        let store = MemoryStore::new();
        store.insert(make_id(1), Points::new(1));

        assert_eq!(store.get(&make_id(2)), None);
        assert!(!store.contains(&make_id(2)));
    }

    #[test]
    fn test_zero_points_are_stored() {
        let store = MemoryStore::new();
        let id = make_id(7);

        store.insert(id, Points::ZERO);
        assert_eq!(store.get(&id), Some(Points::ZERO));
    }

    #[test]
    fn test_get_or_compute_skips_cached() {
        let store = MemoryStore::new();
        let id = make_id(1);
        let calls = AtomicUsize::new(0);

        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Points::new(12)
        };

        assert_eq!(store.get_or_compute(&id, compute), Entry::Computed(Points::new(12)));
        assert_eq!(store.get_or_compute(&id, compute), Entry::Cached(Points::new(12)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_inserts_first_writer_wins() {
        const THREADS: usize = 16;
        let store = MemoryStore::new();
        let id = make_id(1);
        let barrier = Barrier::new(THREADS);

        let results: Vec<InsertResult> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|n| {
                    let store = &store;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        store.insert(id, Points::new(n as u64))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let inserted = results
            .iter()
            .filter(|r| matches!(r, InsertResult::Inserted))
            .count();
        assert_eq!(inserted, 1);

        let stored = store.get(&id).unwrap();
        for result in results {
            if let InsertResult::AlreadyExists { existing } = result {
                assert_eq!(existing, stored);
            }
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_get_or_compute_agrees() {
        const THREADS: usize = 16;
        let store = MemoryStore::new();
        let id = make_id(3);
        let barrier = Barrier::new(THREADS);

        let seen: Vec<Points> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let store = &store;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        match store.get_or_compute(&id, || Points::new(42)) {
                            Entry::Computed(points) | Entry::Cached(points) => points,
                        }
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(seen.iter().all(|p| *p == Points::new(42)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_distinct_ids_do_not_interfere() {
        let store = MemoryStore::new();

        std::thread::scope(|s| {
            for n in 0..8u32 {
                let store = &store;
                s.spawn(move || {
                    store.insert(make_id(n), Points::new(u64::from(n)));
                });
            }
        });

        assert_eq!(store.len(), 8);
        for n in 0..8u32 {
            assert_eq!(store.get(&make_id(n)), Some(Points::new(u64::from(n))));
        }
    }
}
