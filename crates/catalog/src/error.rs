//! Error types for the catalog crate.
//!
//! Selection itself never fails, so everything here belongs to the edges:
//! reading a catalog file and parsing user-supplied enum values.

use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file was not a valid JSON array of car entries
    #[error("Failed to decode catalog: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// A field had a value we refuse to work with
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A loaded entry failed validation
    ///
    /// `index` is the entry's position in the source array.
    #[error("Entry {index} ({name}) is invalid: {reason}")]
    InvalidEntry {
        index: usize,
        name: String,
        reason: String,
    },

    /// The catalog file held no entries at all
    #[error("Catalog contains no entries")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
