//! English-name heuristic.
//!
//! Counts characters above code point 127. Names with a few emoji or
//! trademark symbols pass; names written mostly in another script do not.
//! This is an approximation, not a language detector.

use aps_model::{Dataset, Result};

use crate::drop_log::{Cleaned, DropLog, DropReason};

pub use aps_model::DEFAULT_NON_ASCII_THRESHOLD;

/// Number of characters whose code point is above 127.
pub fn non_ascii_count(value: &str) -> usize {
    value.chars().filter(|ch| u32::from(*ch) > 127).count()
}

/// True when `value` has at most `threshold` non-ASCII characters.
pub fn is_probably_english(value: &str, threshold: usize) -> bool {
    non_ascii_count(value) <= threshold
}

pub fn filter_charset(dataset: &Dataset, name: usize, threshold: usize) -> Result<Cleaned> {
    let mut dropped = DropLog::new();
    let mut kept = Vec::with_capacity(dataset.len());
    for (idx, record) in dataset.iter().enumerate() {
        let value = record.field(name)?;
        let non_ascii = non_ascii_count(value);
        if non_ascii <= threshold {
            kept.push(record.clone());
        } else {
            dropped.record(idx + 1, Some(value), DropReason::NonEnglishName { non_ascii });
        }
    }
    Ok(Cleaned {
        dataset: dataset.with_records(kept),
        dropped,
    })
}
