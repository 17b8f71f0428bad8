//! Scoring: the fixed point formula over a validated receipt.
//!
//! Every rule contributes independently and the contributions are summed.
//! All arithmetic is integer; price rules work in exact cents.

use crate::receipt::{Amount, PurchaseTime, ValidItem, ValidReceipt};
use crate::types::Points;

/// Points for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Points for a total that is a multiple of 0.25.
pub const QUARTER_TOTAL_POINTS: u64 = 25;

/// Points per two line items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Points for an odd final digit in the purchase date.
pub const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase between 14:00 and 15:59.
pub const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub retailer_name: Points,
    pub round_total: Points,
    pub quarter_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .sum()
    }
}

/// Score a validated receipt.
pub fn score(receipt: &ValidReceipt) -> Points {
    breakdown(receipt).total()
}

/// Score a validated receipt, keeping each rule's contribution.
pub fn breakdown(receipt: &ValidReceipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer_name: retailer_name_points(receipt.retailer()),
        round_total: round_total_points(receipt.total()),
        quarter_total: quarter_total_points(receipt.total()),
        item_pairs: item_pair_points(receipt.items().len()),
        item_descriptions: receipt.items().iter().map(item_description_points).sum(),
        odd_day: odd_day_points(receipt.purchase_date().last_digit()),
        afternoon: afternoon_points(receipt.purchase_time()),
    }
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> Points {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    Points::new(count as u64)
}

pub fn round_total_points(total: Amount) -> Points {
    if total.cents_part() == 0 {
        Points::new(ROUND_TOTAL_POINTS)
    } else {
        Points::ZERO
    }
}

/// Whole units are always a multiple of 25 cents, so only the cents decide.
pub fn quarter_total_points(total: Amount) -> Points {
    if total.cents_part() % 25 == 0 {
        Points::new(QUARTER_TOTAL_POINTS)
    } else {
        Points::ZERO
    }
}

pub fn item_pair_points(item_count: usize) -> Points {
    Points::new((item_count as u64 / 2).saturating_mul(ITEM_PAIR_POINTS))
}

/// `ceil(0.2 * price)` when the trimmed description length is a multiple of 3.
///
/// In cents that is `ceil(cents / 500)`.
pub fn item_description_points(item: &ValidItem) -> Points {
    if item.description().trim().len() % 3 != 0 {
        return Points::ZERO;
    }
    let points = item.price().total_cents().div_ceil(500);
    Points::new(u64::try_from(points).unwrap_or(u64::MAX))
}

pub fn odd_day_points(last_digit: u8) -> Points {
    if last_digit % 2 == 1 {
        Points::new(ODD_DAY_POINTS)
    } else {
        Points::ZERO
    }
}

/// Hour 14 or 15; minutes are not considered.
pub fn afternoon_points(time: PurchaseTime) -> Points {
    if matches!(time.hour(), 14 | 15) {
        Points::new(AFTERNOON_POINTS)
    } else {
        Points::ZERO
    }
}
