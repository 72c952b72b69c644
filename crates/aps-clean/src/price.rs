//! Keeps free apps only.

use aps_model::{Dataset, PriceRule, Record, Result, parse_field};

use crate::drop_log::{Cleaned, DropLog, DropReason};

/// Whether the price field of `record` marks it as free under `rule`.
///
/// A numeric rule fails with `DataError::Parse` when the field is not a
/// number.
pub fn is_free(record: &Record, row: usize, column: usize, rule: &PriceRule) -> Result<bool> {
    match rule {
        PriceRule::Label { free } => Ok(record.field(column)? == free.as_str()),
        PriceRule::Numeric { free } => Ok(parse_field(record, row, column)? == *free),
    }
}

pub fn filter_price(dataset: &Dataset, column: usize, rule: &PriceRule) -> Result<Cleaned> {
    let mut dropped = DropLog::new();
    let mut kept = Vec::with_capacity(dataset.len());
    for (idx, record) in dataset.iter().enumerate() {
        if is_free(record, idx + 1, column, rule)? {
            kept.push(record.clone());
        } else {
            let price = record.field(column)?.to_string();
            dropped.record(idx + 1, None, DropReason::NotFree { price });
        }
    }
    Ok(Cleaned {
        dataset: dataset.with_records(kept),
        dropped,
    })
}
