//! Receipt: a purchase record submitted for scoring.
//!
//! Two shapes live here. [`Receipt`] is the candidate decoded from untrusted
//! JSON, with every field held as raw text. [`ValidReceipt`] is only produced
//! by [`crate::validation::validate_receipt`] and carries parsed values, so
//! scoring never has to deal with malformed text.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;
use crate::grammar::Field;

// ============================================================================
// Candidate receipt (untrusted)
// ============================================================================

/// One purchased product as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub short_description: String,
    pub price: String,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt as submitted, before validation.
///
/// Decoding is lenient about shape, the way Go's `encoding/json` is:
/// - keys match case-insensitively (ASCII) and unknown keys are ignored
/// - a repeated key overwrites the earlier value
/// - missing fields stay empty; `null` leaves a text field as it was and
///   clears `items`
///
/// The grammars then reject whatever is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<LineItem>,
    pub total: String,
}

impl Receipt {
    /// Start building a receipt.
    pub fn builder() -> ReceiptBuilder {
        ReceiptBuilder::default()
    }

    /// Decode a candidate receipt from raw JSON bytes.
    ///
    /// A top-level `null` decodes as an empty receipt.
    pub fn from_json(raw: &[u8]) -> Result<Self, ParseError> {
        let receipt: Option<Receipt> = serde_json::from_slice(raw)?;
        Ok(receipt.unwrap_or_default())
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Vec<u8> {
        // A struct of strings always serializes.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

const ITEMS_KEY: &str = "items";

fn key_is(key: &str, field: Field) -> bool {
    key.eq_ignore_ascii_case(field.name())
}

fn set_unless_null(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl<'de> Deserialize<'de> for Receipt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ReceiptVisitor)
    }
}

struct ReceiptVisitor;

impl<'de> Visitor<'de> for ReceiptVisitor {
    type Value = Receipt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a receipt object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Receipt, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut receipt = Receipt::default();

        while let Some(key) = map.next_key::<String>()? {
            if key_is(&key, Field::Retailer) {
                set_unless_null(&mut receipt.retailer, map.next_value()?);
            } else if key_is(&key, Field::PurchaseDate) {
                set_unless_null(&mut receipt.purchase_date, map.next_value()?);
            } else if key_is(&key, Field::PurchaseTime) {
                set_unless_null(&mut receipt.purchase_time, map.next_value()?);
            } else if key_is(&key, Field::Total) {
                set_unless_null(&mut receipt.total, map.next_value()?);
            } else if key.eq_ignore_ascii_case(ITEMS_KEY) {
                receipt.items = map.next_value::<Option<Vec<LineItem>>>()?.unwrap_or_default();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(receipt)
    }
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LineItemVisitor)
    }
}

struct LineItemVisitor;

impl<'de> Visitor<'de> for LineItemVisitor {
    type Value = LineItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a line item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<LineItem, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut item = LineItem::default();

        while let Some(key) = map.next_key::<String>()? {
            if key_is(&key, Field::ShortDescription) {
                set_unless_null(&mut item.short_description, map.next_value()?);
            } else if key_is(&key, Field::Price) {
                set_unless_null(&mut item.price, map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(item)
    }
}

/// Builder for candidate receipts.
#[derive(Debug, Clone, Default)]
pub struct ReceiptBuilder {
    receipt: Receipt,
}

impl ReceiptBuilder {
    pub fn retailer(mut self, retailer: impl Into<String>) -> Self {
        self.receipt.retailer = retailer.into();
        self
    }

    pub fn purchase_date(mut self, date: impl Into<String>) -> Self {
        self.receipt.purchase_date = date.into();
        self
    }

    pub fn purchase_time(mut self, time: impl Into<String>) -> Self {
        self.receipt.purchase_time = time.into();
        self
    }

    /// Append a line item.
    pub fn item(mut self, description: impl Into<String>, price: impl Into<String>) -> Self {
        self.receipt.items.push(LineItem::new(description, price));
        self
    }

    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.receipt.total = total.into();
        self
    }

    pub fn build(self) -> Receipt {
        self.receipt
    }
}

// ============================================================================
// Validated receipt
// ============================================================================

/// An exact currency amount, held as whole units plus cents.
///
/// Only constructed from text that already matched the amount grammar.
/// Whole units beyond `u128::MAX` clamp; the cents are always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount {
    whole: u128,
    cents: u8,
}

impl Amount {
    /// Parse text that matched `^[0-9]+\.[0-9]{2}$`.
    pub(crate) fn from_matched(text: &str) -> Self {
        let (whole, cents) = text.split_once('.').unwrap_or((text, "00"));
        Self {
            whole: digits_saturating(whole),
            cents: digits_saturating(cents).min(99) as u8,
        }
    }

    /// The two-digit cents component, `0..=99`.
    pub const fn cents_part(&self) -> u8 {
        self.cents
    }

    /// The full amount in cents, saturating at `u128::MAX`.
    pub const fn total_cents(&self) -> u128 {
        self.whole
            .saturating_mul(100)
            .saturating_add(self.cents as u128)
    }
}

fn digits_saturating(digits: &str) -> u128 {
    digits.bytes().fold(0u128, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(u128::from(b.wrapping_sub(b'0')))
    })
}

/// A validated `YYYY-MM-DD` date, kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PurchaseDate(String);

impl PurchaseDate {
    /// The final character of the date text as a digit.
    pub fn last_digit(&self) -> u8 {
        self.0
            .bytes()
            .last()
            .map_or(0, |b| b.wrapping_sub(b'0'))
    }
}

/// A validated 24-hour `HH:MM` time. Only the hour is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PurchaseTime {
    hour: u8,
}

impl PurchaseTime {
    /// Parse text that matched `^([01][0-9]|2[0-3]):[0-5][0-9]$`.
    pub(crate) fn from_matched(text: &str) -> Self {
        let hour = text.split_once(':').map_or(text, |(hour, _)| hour);
        Self {
            hour: digits_saturating(hour).min(23) as u8,
        }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }
}

/// A line item that passed both of its grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidItem {
    pub(crate) description: String,
    pub(crate) price: Amount,
}

impl ValidItem {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

/// A receipt whose every field matched its grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReceipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: PurchaseDate,
    pub(crate) purchase_time: PurchaseTime,
    pub(crate) items: Vec<ValidItem>,
    pub(crate) total: Amount,
}

impl ValidReceipt {
    pub(crate) fn new(
        retailer: &str,
        purchase_date: &str,
        purchase_time: &str,
        items: Vec<ValidItem>,
        total: &str,
    ) -> Self {
        Self {
            retailer: retailer.to_owned(),
            purchase_date: PurchaseDate(purchase_date.to_owned()),
            purchase_time: PurchaseTime::from_matched(purchase_time),
            items,
            total: Amount::from_matched(total),
        }
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> &PurchaseDate {
        &self.purchase_date
    }

    pub fn purchase_time(&self) -> PurchaseTime {
        self.purchase_time
    }

    pub fn items(&self) -> &[ValidItem] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}
