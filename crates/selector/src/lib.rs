//! Filtering and ranking of catalog cars against a buyer's preferences.
//!
//! This crate provides:
//! - Filter trait and one filter per constraint (budget, usage, mileage)
//! - FilterPipeline for composing filters
//! - RecommendationSelector, which runs the filters with their fallbacks and
//!   ranks the survivors by value
//!
//! ## Example Usage
//! ```ignore
//! use selector::{Query, RecommendationSelector};
//! use catalog::Usage;
//!
//! let selector = RecommendationSelector::builtin();
//! let selection = selector.select_explained(&Query::new(2_000_000, 20, Usage::Family));
//!
//! println!("{}", selection.path);
//! for car in &selection.cars {
//!     println!("{} ({:.0} per kmpl)", car.name, car.value_ratio());
//! }
//! ```

pub mod types;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod selector;

// Re-export main types
pub use types::{Candidate, Query, Selection, SelectionPath};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use selector::{MAX_RECOMMENDATIONS, RecommendationSelector, select};
