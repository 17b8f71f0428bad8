//! The Processor: unified API for scoring receipts.
//!
//! The Processor brings together validation, scoring, identity, and storage
//! behind the two operations the transport layer needs: `process` and
//! `lookup`.

use receipt_points_core::{
    breakdown, validate_receipt, ParseError, Points, Receipt, ReceiptId,
};
use receipt_points_store::{Entry, MemoryStore, PointsStore, PointsStoreExt};

use crate::error::{ProcessError, Result};

/// Default upper bound on a submitted payload.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration for the Processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Payloads longer than this are rejected before decoding.
    pub max_body_bytes: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// The main Processor struct.
///
/// Owns the score store. Share it across request handlers behind an `Arc`;
/// every method takes `&self`.
pub struct Processor<S: PointsStore = MemoryStore> {
    /// The storage backend.
    store: S,
    /// Configuration.
    config: ProcessorConfig,
}

impl Processor<MemoryStore> {
    /// A processor over a fresh in-memory store.
    pub fn in_memory(config: ProcessorConfig) -> Self {
        Self::new(MemoryStore::new(), config)
    }
}

impl Default for Processor<MemoryStore> {
    fn default() -> Self {
        Self::in_memory(ProcessorConfig::default())
    }
}

impl<S: PointsStore> Processor<S> {
    /// Create a new processor instance.
    pub fn new(store: S, config: ProcessorConfig) -> Self {
        Self { store, config }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Accept a raw submission and return its id.
    ///
    /// On success a score is stored for the id, either computed by this call
    /// or left over from an earlier submission of the same bytes.
    pub fn process(&self, raw: &[u8]) -> Result<ReceiptId> {
        match self.accept(raw) {
            Ok(id) => Ok(id),
            Err(e) => {
                tracing::debug!(error = %e, bytes = raw.len(), "receipt rejected");
                Err(e)
            }
        }
    }

    fn accept(&self, raw: &[u8]) -> Result<ReceiptId> {
        if raw.len() > self.config.max_body_bytes {
            return Err(ParseError::TooLarge {
                size: raw.len(),
                limit: self.config.max_body_bytes,
            }
            .into());
        }

        let receipt = Receipt::from_json(raw)?;
        let valid = validate_receipt(&receipt)?;
        let id = ReceiptId::derive(raw);

        let entry = self.store.get_or_compute(&id, || {
            let parts = breakdown(&valid);
            tracing::trace!(receipt_id = %id, ?parts, "score breakdown");
            parts.total()
        });

        match entry {
            Entry::Computed(points) => {
                tracing::info!(receipt_id = %id, %points, "receipt scored");
            }
            Entry::Cached(points) => {
                tracing::debug!(receipt_id = %id, %points, "receipt already scored");
            }
        }

        Ok(id)
    }

    /// Get the score for a textual id.
    ///
    /// A token that is not a well-formed id is reported as unknown.
    pub fn lookup(&self, token: &str) -> Result<Points> {
        let id = ReceiptId::parse(token).map_err(|_| ProcessError::UnknownIdentity)?;
        self.points(&id)
    }

    /// Get the score for an id.
    pub fn points(&self, id: &ReceiptId) -> Result<Points> {
        self.store.get(id).ok_or(ProcessError::UnknownIdentity)
    }
}
