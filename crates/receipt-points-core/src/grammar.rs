//! Field grammars: one fixed pattern per receipt field kind.
//!
//! Character classes are spelled out in ASCII. A "word" character is
//! `[0-9A-Za-z_]` and whitespace is `[\t\n\f\r ]`; the Unicode-aware `\w`,
//! `\s` and `\d` of the `regex` crate would accept more than the wire format
//! allows.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// ============================================================================
// Patterns (compiled once)
// ============================================================================

static RETAILER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_\t\n\f\r &-]+$").expect("invalid retailer regex")
});

static SHORT_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_\t\n\f\r -]+$").expect("invalid description regex")
});

static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("invalid amount regex"));

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("invalid date regex")
});

static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("invalid time regex"));

// ============================================================================
// Field table
// ============================================================================

/// Every text field that carries a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Retailer,
    PurchaseDate,
    PurchaseTime,
    Total,
    ShortDescription,
    Price,
}

impl Field {
    /// The JSON key this field is read from.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Retailer => "retailer",
            Field::PurchaseDate => "purchaseDate",
            Field::PurchaseTime => "purchaseTime",
            Field::Total => "total",
            Field::ShortDescription => "shortDescription",
            Field::Price => "price",
        }
    }

    fn grammar(self) -> &'static Regex {
        match self {
            Field::Retailer => &RETAILER,
            Field::ShortDescription => &SHORT_DESCRIPTION,
            Field::Total | Field::Price => &AMOUNT,
            Field::PurchaseDate => &DATE,
            Field::PurchaseTime => &TIME,
        }
    }

    /// Check a value against this field's grammar.
    pub fn accepts(self, value: &str) -> bool {
        self.grammar().is_match(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
