//! Filter to keep only cars the buyer can afford.
//!
//! This is always the first stage; an empty result here short-circuits the
//! whole selection to the cheapest-overall fallback.

use crate::traits::Filter;
use crate::types::{Candidate, Query};

/// Keeps candidates priced at or below the query budget.
pub struct BudgetFilter;

impl Filter for BudgetFilter {
    fn name(&self) -> &str {
        "BudgetFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &Query) -> Vec<Candidate<'a>> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.car.within_budget(query.budget))
            .collect()
    }
}
