//! Filter to remove cars that are already part of the result.
//!
//! Used when topping up a short result so nothing is recommended twice.

use crate::traits::Filter;
use crate::types::{Candidate, Query};
use std::collections::HashSet;

/// Removes candidates whose catalog position is already selected.
///
/// ## Algorithm
/// Uses a HashSet of catalog positions for O(1) lookups.
pub struct AlreadySelectedFilter {
    selected: HashSet<usize>,
}

impl AlreadySelectedFilter {
    /// Create a filter excluding the given candidates.
    pub fn new(selected: &[Candidate<'_>]) -> Self {
        Self {
            selected: selected.iter().map(|candidate| candidate.position).collect(),
        }
    }
}

impl Filter for AlreadySelectedFilter {
    fn name(&self) -> &str {
        "AlreadySelectedFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, _query: &Query) -> Vec<Candidate<'a>> {
        candidates
            .into_iter()
            .filter(|candidate| !self.selected.contains(&candidate.position))
            .collect()
    }
}
