//! Filter to enforce the buyer's minimum fuel economy.

use crate::traits::Filter;
use crate::types::{Candidate, Query};

/// Keeps candidates with mileage at or above the query minimum.
pub struct MileageFilter;

impl Filter for MileageFilter {
    fn name(&self) -> &str {
        "MileageFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &Query) -> Vec<Candidate<'a>> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.car.meets_mileage(query.min_mileage))
            .collect()
    }
}
