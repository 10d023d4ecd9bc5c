//! Typed values crossing the input boundary.
//!
//! Raw, loosely typed input (user text, file contents) is converted here
//! exactly once; everything past the boundary works with well-typed values.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StockError;

/// Name of a stocked item.
///
/// The name doubles as the item's identity: two entries with the same name
/// are the same item. Produced only by [`ItemName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Parse a raw string into an item name.
    ///
    /// Surrounding whitespace is trimmed; an empty result is rejected.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, StockError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StockError::invalid_name("name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemName {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A stock delta or level.
///
/// May be negative: removals subtract, and negative adds are allowed as
/// corrective adjustments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse raw text into a quantity.
    ///
    /// Only integer text is accepted (surrounding whitespace tolerated);
    /// anything else is an [`StockError::InvalidQuantity`].
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, StockError> {
        let raw = raw.as_ref();
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| StockError::invalid_quantity(format!("{raw:?}: {e}")))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl FromStr for Quantity {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
