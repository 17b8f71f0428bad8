//! Application state for the API server.

use std::sync::Arc;

use receipt_points::Processor;

/// API server state.
#[derive(Clone)]
pub struct AppState {
    /// The shared receipt processor.
    pub processor: Arc<Processor>,
}

impl AppState {
    pub fn new(processor: Processor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    pub fn from_shared(processor: Arc<Processor>) -> Self {
        Self { processor }
    }
}
