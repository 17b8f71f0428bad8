//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use receipt_points::{PointsStore, Processor, ProcessorConfig, Receipt, ReceiptId, Result};

/// A test fixture wrapping a processor over a fresh memory store.
pub struct TestFixture {
    pub processor: Processor,
}

impl TestFixture {
    /// Create a new test fixture with default limits.
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            processor: Processor::in_memory(config),
        }
    }

    /// Submit a receipt as compact JSON.
    pub fn submit(&self, receipt: &Receipt) -> Result<ReceiptId> {
        self.processor.process(&receipt.to_json())
    }

    /// Submit raw bytes exactly as given.
    pub fn submit_raw(&self, raw: &[u8]) -> Result<ReceiptId> {
        self.processor.process(raw)
    }

    /// Stored points for `id`, if any.
    pub fn points(&self, id: ReceiptId) -> Option<u64> {
        self.processor.points(&id).ok().map(|p| p.get())
    }

    /// Number of stored scores.
    pub fn stored(&self) -> usize {
        self.processor.store().len()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The Target receipt: 28 points.
pub fn target_receipt() -> Receipt {
    Receipt::builder()
        .retailer("Target")
        .purchase_date("2022-01-01")
        .purchase_time("13:01")
        .item("Mountain Dew 12PK", "6.49")
        .item("Emils Cheese Pizza", "12.25")
        .item("Knorr Creamy Chicken", "1.26")
        .item("Doritos Nacho Cheese", "3.35")
        .item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")
        .total("35.35")
        .build()
}

/// The M&M Corner Market receipt: 109 points.
pub fn corner_market_receipt() -> Receipt {
    Receipt::builder()
        .retailer("M&M Corner Market")
        .purchase_date("2022-03-20")
        .purchase_time("14:33")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .total("9.00")
        .build()
}

/// A receipt with no items: 102 points.
pub fn empty_items_receipt() -> Receipt {
    Receipt::builder()
        .retailer("Corner-Shop 7")
        .purchase_date("2023-02-31")
        .purchase_time("15:59")
        .total("0.00")
        .build()
}
