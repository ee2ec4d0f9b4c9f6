//! Types flowing through the selector.

use catalog::{CarEntry, Catalog, Usage};
use std::fmt;
use tracing::warn;

/// A buyer's preferences.
///
/// `budget` and `min_mileage` are signed so that zero or negative inputs can
/// be passed through untouched; they simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Inclusive upper bound on price
    pub budget: i64,
    /// Inclusive lower bound on mileage
    pub min_mileage: i64,
    /// `None` means the caller asked for a usage we don't know, which
    /// matches no entry and forces the usage fallback
    pub usage: Option<Usage>,
}

impl Query {
    pub fn new(budget: i64, min_mileage: i64, usage: Usage) -> Self {
        Self {
            budget,
            min_mileage,
            usage: Some(usage),
        }
    }

    /// Build a query from an unparsed usage string.
    ///
    /// Unknown usage values are kept as `None` rather than rejected.
    pub fn from_raw(budget: i64, min_mileage: i64, usage: &str) -> Self {
        let usage = match usage.parse::<Usage>() {
            Ok(usage) => Some(usage),
            Err(e) => {
                warn!("{}; usage will match no catalog entry", e);
                None
            }
        };
        Self {
            budget,
            min_mileage,
            usage,
        }
    }
}

/// A catalog entry under consideration, tagged with its catalog position.
///
/// The position identifies the entry for deduplication and is what keeps
/// ranking ties in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub position: usize,
    pub car: &'a CarEntry,
}

impl<'a> Candidate<'a> {
    pub fn new(position: usize, car: &'a CarEntry) -> Self {
        Self { position, car }
    }

    /// Every catalog entry as a candidate, in catalog order
    pub fn from_catalog(catalog: &'a Catalog) -> Vec<Candidate<'a>> {
        catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(position, car)| Candidate::new(position, car))
            .collect()
    }
}

/// Which branch of the fallback chain produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    /// Enough entries met every constraint
    AllCriteria,
    /// `matched` entries met every constraint; the rest came from in-budget
    /// entries of any usage that still meet the mileage bound
    PartialFill { matched: usize },
    /// Nothing met the mileage bound, so it was dropped
    MileageRelaxed,
    /// Nothing was within budget, so the cheapest entries were taken
    CheapestOverall,
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPath::AllCriteria => write!(f, "every car meets budget, usage and mileage"),
            SelectionPath::PartialFill { matched } => write!(
                f,
                "{} car(s) meet every preference; the rest are in budget and meet mileage",
                matched
            ),
            SelectionPath::MileageRelaxed => {
                write!(f, "no car meets the mileage bound; best value shown instead")
            }
            SelectionPath::CheapestOverall => {
                write!(f, "no car is within budget; cheapest cars shown instead")
            }
        }
    }
}

/// The outcome of one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// At most three entries, best first
    pub cars: Vec<CarEntry>,
    pub path: SelectionPath,
    /// True when no in-budget entry matched the requested usage and every
    /// in-budget entry was considered instead
    pub usage_relaxed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_raw() {
        let query = Query::from_raw(30000, 15, "family");
        assert_eq!(query, Query::new(30000, 15, Usage::Family));

        let query = Query::from_raw(30000, 15, "truck");
        assert_eq!(query.usage, None);
        assert_eq!(query.budget, 30000);
    }

    #[test]
    fn test_path_display() {
        let text = SelectionPath::PartialFill { matched: 2 }.to_string();
        assert!(text.starts_with("2 car(s)"));
    }
}
