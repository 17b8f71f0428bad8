//! Proptest generators for property-based testing.

use proptest::prelude::*;

use receipt_points_core::{LineItem, Receipt};

/// Generate a retailer name drawn from the retailer grammar.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 &_-]{0,23}".prop_map(String::from)
}

/// Generate an item description drawn from the description grammar.
pub fn description() -> impl Strategy<Value = String> {
    "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 _-]{0,23}[ ]{0,3}".prop_map(String::from)
}

/// Generate an amount with exactly two decimal places.
pub fn amount() -> impl Strategy<Value = String> {
    (0u64..100_000, 0u8..100).prop_map(|(whole, cents)| format!("{whole}.{cents:02}"))
}

/// Generate an amount the grammar must reject.
pub fn invalid_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..1000, 0u8..10).prop_map(|(w, c)| format!("{w}.{c}")),
        (0u64..1000, 0u16..1000).prop_map(|(w, c)| format!("{w}.{c:03}")),
        (0u64..1000, 0u8..100).prop_map(|(w, c)| format!("-{w}.{c:02}")),
        (0u64..1000, 0u8..100).prop_map(|(w, c)| format!("+{w}.{c:02}")),
        (0u8..100).prop_map(|c| format!(".{c:02}")),
        (0u64..1000).prop_map(|w| w.to_string()),
    ]
}

/// Generate a `YYYY-MM-DD` date the grammar accepts (day 31 in any month).
pub fn purchase_date() -> impl Strategy<Value = String> {
    (0u16..10_000, 1u8..=12, 1u8..=31).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a 24-hour `HH:MM` time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u8..24, 0u8..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Generate a valid line item.
pub fn line_item() -> impl Strategy<Value = LineItem> {
    (description(), amount()).prop_map(|(d, p)| LineItem::new(d, p))
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<LineItem>,
    pub total: String,
}

impl ReceiptParams {
    /// The candidate receipt these parameters describe.
    pub fn to_receipt(&self) -> Receipt {
        Receipt {
            retailer: self.retailer.clone(),
            purchase_date: self.purchase_date.clone(),
            purchase_time: self.purchase_time.clone(),
            items: self.items.clone(),
            total: self.total.clone(),
        }
    }

    /// Compact JSON body for these parameters.
    pub fn to_json(&self) -> Vec<u8> {
        self.to_receipt().to_json()
    }
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer(),
            purchase_date(),
            purchase_time(),
            prop::collection::vec(line_item(), 0..12),
            amount(),
        )
            .prop_map(|(retailer, date, time, items, total)| ReceiptParams {
                retailer,
                purchase_date: date,
                purchase_time: time,
                items,
                total,
            })
            .boxed()
    }
}
