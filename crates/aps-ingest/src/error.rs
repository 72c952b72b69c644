//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog file.
///
/// Rows with an unexpected field count are not errors at this stage; they
/// are loaded as-is and dropped later by the schema filter.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Catalog file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Input is not decodable as delimited UTF-8 text.
    #[error("failed to parse CSV {path}{}: {message}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Option Errors ===
    /// Delimiter cannot be used by the reader.
    #[error("delimiter {delimiter:?} is not a single-byte ASCII character")]
    InvalidDelimiter { delimiter: char },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" (line {line})")).unwrap_or_default()
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
