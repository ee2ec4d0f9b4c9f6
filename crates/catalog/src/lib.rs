//! # Catalog Crate
//!
//! This crate holds the car data the selector works on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CarEntry, Usage, Catalog)
//! - **builtin**: The built-in car table
//! - **loader**: Load a catalog from a JSON file instead
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Usage};
//!
//! let catalog = Catalog::builtin();
//! for car in catalog.by_usage(Usage::Sports) {
//!     println!("{} costs {} ({:.0} per kmpl)", car.name, car.price, car.value_ratio());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod builtin;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{CarEntry, Catalog, Usage};
