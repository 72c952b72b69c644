//! Drops rows whose field count differs from the header.

use aps_model::Dataset;

use crate::drop_log::{Cleaned, DropLog, DropReason};

pub fn filter_schema(dataset: &Dataset) -> Cleaned {
    let expected = dataset.width();
    let mut dropped = DropLog::new();
    let mut kept = Vec::with_capacity(dataset.len());
    for (idx, record) in dataset.iter().enumerate() {
        if record.len() == expected {
            kept.push(record.clone());
        } else {
            dropped.record(
                idx + 1,
                None,
                DropReason::SchemaMismatch {
                    expected,
                    found: record.len(),
                },
            );
        }
    }
    Cleaned {
        dataset: dataset.with_records(kept),
        dropped,
    }
}
