//! Error types shared by the cleaning and aggregation stages.

use thiserror::Error;

/// Errors raised while reading values out of a dataset.
///
/// Rows excluded by a filter are never reported here; they are recorded in
/// the cleaner's drop log instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A field that must be numeric could not be parsed.
    #[error("row {row}, column {column}: '{value}' is not a number")]
    Parse {
        /// 1-based position of the record among the dataset's data rows.
        row: usize,
        column: usize,
        value: String,
    },

    /// A column index points outside the header or record.
    #[error("column index {index} is out of range for {width} fields")]
    ColumnOutOfRange { index: i64, width: usize },

    /// A column name does not appear in the header.
    #[error("column '{name}' not found in header")]
    UnknownColumn { name: String },

    /// A profile name does not match any built-in profile.
    #[error("unknown dataset profile '{name}' (expected one of: {known})")]
    UnknownProfile { name: String, known: String },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = DataError::Parse {
            row: 4,
            column: 3,
            value: "3.0M".to_string(),
        };
        assert_eq!(err.to_string(), "row 4, column 3: '3.0M' is not a number");
    }

    #[test]
    fn out_of_range_display() {
        let err = DataError::ColumnOutOfRange {
            index: -20,
            width: 16,
        };
        assert_eq!(
            err.to_string(),
            "column index -20 is out of range for 16 fields"
        );
    }
}
