//! Value Objects for the storefront catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whole-rupee price. Unsigned, so `price >= 0` holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(rupees: u64) -> Self { Self(rupees) }
    pub fn value(&self) -> u64 { self.0 }
    pub fn saturating_sub(&self, other: Price) -> Price { Price(self.0.saturating_sub(other.0)) }

    /// Digits grouped the Indian way: last three, then pairs (`1,00,000`).
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        if digits.len() <= 3 { return digits; }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "₹{}", self.grouped()) }
}

impl From<u64> for Price {
    fn from(rupees: u64) -> Self { Self(rupees) }
}

/// Inclusive price window `[min, max]`. A window with `min > max` contains nothing.
/// The default window holds only zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange { pub min: Price, pub max: Price }

impl PriceRange {
    pub fn new(min: impl Into<Price>, max: impl Into<Price>) -> Self { Self { min: min.into(), max: max.into() } }
    pub fn contains(&self, price: Price) -> bool { price >= self.min && price <= self.max }
}

/// Result ordering selectable on listing pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey { Name, PriceLow, PriceHigh, Newest, Featured }

impl SortKey {
    pub const ALL: [SortKey; 5] = [SortKey::Featured, SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Newest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
            Self::Featured => "featured",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name A-Z",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Newest => "Newest",
            Self::Featured => "Featured",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SortKey {
    type Err = SortKeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL.into_iter().find(|k| k.as_str() == s.trim()).ok_or_else(|| SortKeyError(s.to_string()))
    }
}

#[derive(Debug, Clone)] pub struct SortKeyError(String);
impl std::error::Error for SortKeyError {}
impl fmt::Display for SortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Unknown sort key '{}'", self.0) }
}
