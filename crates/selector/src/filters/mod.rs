//! Filter implementations for the selection pipeline.
//!
//! One filter per constraint, plus the exclusion filter used when topping
//! up a short result.

pub mod budget;
pub mod usage;
pub mod mileage;
pub mod already_selected;

// Re-export for convenience
pub use budget::BudgetFilter;
pub use usage::UsageFilter;
pub use mileage::MileageFilter;
pub use already_selected::AlreadySelectedFilter;
