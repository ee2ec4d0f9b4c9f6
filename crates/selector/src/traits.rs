//! Core traits for the selection pipeline.
//!
//! This module defines the Filter trait that lets each selection stage be
//! applied on its own or chained in a FilterPipeline.

use crate::types::{Candidate, Query};

/// Core trait for filtering candidates.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared between threads
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters must keep the relative order of the candidates they keep
/// - Filtering never fails: a filter that matches nothing returns an empty Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `query` - The buyer's preferences
    fn apply<'a>(&self, candidates: Vec<Candidate<'a>>, query: &Query) -> Vec<Candidate<'a>>;
}
