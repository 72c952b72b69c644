//! Descending ordering for category tables.

use std::cmp::Ordering;

use serde::Serialize;

/// One `(label, value)` row of a ranked table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub value: f64,
}

impl RankedEntry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Order entries by value, highest first; equal values fall back to the
/// label, also descending.
pub fn sort_descending<'a, I>(entries: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut ranked: Vec<RankedEntry> = entries
        .into_iter()
        .map(|(label, value)| RankedEntry::new(label, value))
        .collect();
    ranked.sort_by(descending);
    ranked
}

fn descending(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| b.label.cmp(&a.label))
}
