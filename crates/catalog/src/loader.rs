//! Loading a catalog from a JSON file.
//!
//! The file holds a JSON array of records with the same field names the
//! recommendations are serialized with:
//!
//! ```json
//! [{"name": "Honda Civic", "price": 25000, "mileage": 18, "type": "family",
//!   "reason": "Reliable", "infoUrl": "https://www.honda.com/civic"}]
//! ```
//!
//! Rust concepts you'll see here:
//! - `?` converting `io::Error` and `serde_json::Error` via `#[from]`
//! - Validating data once at the boundary so the selector never has to

use crate::error::{CatalogError, Result};
use crate::types::{CarEntry, Catalog};
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and validate a catalog file.
    ///
    /// Steps:
    /// 1. Read the whole file
    /// 2. Decode it as a JSON array of entries
    /// 3. Validate every entry (non-empty name, non-zero mileage)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());

        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;

        info!("Loaded {} catalog entries", catalog.len());
        Ok(catalog)
    }

    /// Decode and validate a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CarEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }

        Ok(Self::new(entries))
    }
}

fn validate_entry(index: usize, entry: &CarEntry) -> Result<()> {
    let reason = if entry.name.trim().is_empty() {
        "name is empty"
    } else if entry.mileage == 0 {
        "mileage must be positive"
    } else {
        return Ok(());
    };

    Err(CatalogError::InvalidEntry {
        index,
        name: entry.name.clone(),
        reason: reason.to_string(),
    })
}
