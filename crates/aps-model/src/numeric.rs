//! Numeric parsing for catalog fields.
//!
//! Review counts, prices and install counts arrive as text. A value that does
//! not parse is an error for the caller to propagate, never a silent zero.

use crate::dataset::Record;
use crate::error::{DataError, Result};

/// Parse a field as `f64`.
///
/// Surrounding whitespace is ignored. Scientific notation and a leading sign
/// are accepted. Empty strings and `NaN` are rejected because neither can
/// take part in a maximum or a mean.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| !parsed.is_nan())
}

/// Parse the field at `column` of `record`.
///
/// `row` is the 1-based data row position used in the error.
pub fn parse_field(record: &Record, row: usize, column: usize) -> Result<f64> {
    let raw = record.field(column)?;
    parse_number(raw).ok_or_else(|| DataError::Parse {
        row,
        column,
        value: raw.to_string(),
    })
}
