//! Core domain types for the car catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Enums for fixed sets of values, with `FromStr`/`Display`
//! - serde attributes to keep the JSON field names of the catalog records
//! - Read-only shared data behind slices

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Usage
// =============================================================================

/// What the buyer mainly wants the car for.
///
/// Serialized in lowercase (`"family"`, `"sports"`) to match the catalog
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    Family,
    Sports,
}

impl Usage {
    /// All usage categories, in declaration order
    pub const ALL: [Usage; 2] = [Usage::Family, Usage::Sports];

    pub fn as_str(&self) -> &'static str {
        match self {
            Usage::Family => "family",
            Usage::Sports => "sports",
        }
    }
}

impl FromStr for Usage {
    type Err = CatalogError;

    /// Parse a usage value.
    ///
    /// Matching is exact: `"Family"` is not `"family"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "family" => Ok(Usage::Family),
            "sports" => Ok(Usage::Sports),
            _ => Err(CatalogError::InvalidValue {
                field: "usage".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CarEntry
// =============================================================================

/// A single car in the catalog.
///
/// Prices are in one unspecified currency used consistently across the
/// catalog. The link fields are opaque and only ever passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarEntry {
    pub name: String,
    pub price: u64,
    /// Fuel economy (e.g. kmpl); higher is better
    pub mileage: u32,
    #[serde(rename = "type")]
    pub usage: Usage,
    /// Human-readable pitch shown next to the recommendation
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_logo_url: Option<String>,
}

impl CarEntry {
    /// Create an entry without any of the optional links.
    pub fn new(
        name: impl Into<String>,
        price: u64,
        mileage: u32,
        usage: Usage,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            mileage,
            usage,
            reason: reason.into(),
            info_url: None,
            image_url: None,
            brand_logo_url: None,
        }
    }

    /// Price paid per unit of fuel economy. Lower is better value.
    ///
    /// Zero mileage gives `f64::INFINITY` whatever the price, so the ratio
    /// is never NaN.
    pub fn value_ratio(&self) -> f64 {
        if self.mileage == 0 {
            return f64::INFINITY;
        }
        self.price as f64 / self.mileage as f64
    }

    /// Whether the entry costs no more than `budget`.
    ///
    /// Negative budgets exclude everything.
    pub fn within_budget(&self, budget: i64) -> bool {
        u64::try_from(budget).is_ok_and(|budget| self.price <= budget)
    }

    /// Whether the entry's mileage is at least `min_mileage`.
    pub fn meets_mileage(&self, min_mileage: i64) -> bool {
        i64::from(self.mileage) >= min_mileage
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, ordered list of candidate cars.
///
/// Built once and never mutated; wrap it in an `Arc` to share it between
/// threads. Catalog order is significant: it breaks ranking ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CarEntry>,
}

impl Catalog {
    /// Build a catalog from entries in the given order.
    pub fn new(entries: Vec<CarEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in catalog order
    pub fn entries(&self) -> &[CarEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&CarEntry> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries of one usage category, in catalog order
    pub fn by_usage(&self, usage: Usage) -> impl Iterator<Item = &CarEntry> {
        self.entries.iter().filter(move |car| car.usage == usage)
    }
}

impl FromIterator<CarEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CarEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
