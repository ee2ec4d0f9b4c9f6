//! The FilterPipeline chains filters together.
//!
//! The selector runs most stages one at a time because every stage has its
//! own fallback, but a pipeline is handy wherever several constraints apply
//! at once with no fallback in between.

use crate::traits::Filter;
use crate::types::{Candidate, Query};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MileageFilter)
///     .add_filter(AlreadySelectedFilter::new(&selected));
///
/// let top_up = pipeline.apply(in_budget, &query);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    pub fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &Query) -> Vec<Candidate<'a>> {
        let mut current = candidates;
        for filter in &self.filters {
            current = run_filter(filter.as_ref(), current, query);
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a single filter, logging its input and output counts.
pub(crate) fn run_filter<'a>(
    filter: &dyn Filter,
    candidates: Vec<Candidate<'a>>,
    query: &Query,
) -> Vec<Candidate<'a>> {
    let input = candidates.len();
    let output = filter.apply(candidates, query);
    debug!(
        "Filter applied: {} ({} -> {} candidates)",
        filter.name(),
        input,
        output.len()
    );
    output
}
