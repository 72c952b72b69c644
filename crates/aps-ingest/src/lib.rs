//! App catalog ingestion.
//!
//! Loads storefront exports (Apple App Store, Google Play) from delimited
//! text files into positional [`Dataset`](aps_model::Dataset)s. Loading is
//! deliberately forgiving about row shape: rows with the wrong field count
//! are kept for the cleaner to drop and report.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use aps_ingest::{LoadOptions, read_dataset};
//!
//! let apple = read_dataset(Path::new("data/AppleStore.csv"), &LoadOptions::default())?;
//! println!("{} apps, {} columns", apple.len(), apple.width());
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Delimited Reading ===
pub use delimited::{read_dataset, read_dataset_from_reader};

// === Options ===
pub use aps_model::LoadOptions;
