//! Filter to keep only cars of the requested usage category.

use crate::traits::Filter;
use crate::types::{Candidate, Query};

/// Keeps candidates whose usage equals the query's.
///
/// A query with an unrecognized usage (`None`) matches nothing.
pub struct UsageFilter;

impl Filter for UsageFilter {
    fn name(&self) -> &str {
        "UsageFilter"
    }

    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &Query) -> Vec<Candidate<'a>> {
        let Some(usage) = query.usage else {
            return Vec::new();
        };
        candidates
            .into_iter()
            .filter(|candidate| candidate.car.usage == usage)
            .collect()
    }
}
