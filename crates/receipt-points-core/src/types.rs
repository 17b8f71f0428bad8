//! Strong type definitions for receipt points.
//!
//! Identifiers and scores are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A content-addressed receipt identifier.
///
/// Computed as a name-based (version 5, SHA-1) UUID over the exact bytes of
/// the submitted payload in the ISO OID namespace. Byte-identical submissions
/// always map to the same id; any difference in the bytes, including
/// whitespace or key order, yields a different one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Derive the id for a raw submission.
    pub fn derive(raw: &[u8]) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, raw))
    }

    /// Parse a textual token. Accepts every form `Uuid::parse_str` accepts.
    pub fn parse(token: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(token).map(Self)
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0.hyphenated())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A reward point total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Add two totals, clamping at `u64::MAX`.
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Points {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
