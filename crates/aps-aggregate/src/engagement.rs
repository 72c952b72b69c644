//! Average engagement per category.

use std::collections::BTreeMap;

use aps_model::{DataError, Dataset, MetricNormalizer, Record, Result, parse_number};
use serde::Serialize;

use crate::rank::{RankedEntry, sort_descending};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// Per-category mean of a numeric column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngagementTable {
    categories: BTreeMap<String, Accumulator>,
}

impl EngagementTable {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Mean metric for `label`, or `None` if no row carries it.
    pub fn mean(&self, label: &str) -> Option<f64> {
        self.categories.get(label).map(mean_of)
    }

    /// Rows that contributed to `label`.
    pub fn count(&self, label: &str) -> Option<usize> {
        self.categories.get(label).map(|acc| acc.count)
    }

    pub fn means(&self) -> BTreeMap<String, f64> {
        self.categories
            .iter()
            .map(|(label, acc)| (label.clone(), mean_of(acc)))
            .collect()
    }

    /// Categories with their mean, highest first.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        sort_descending(
            self.categories
                .iter()
                .map(|(label, acc)| (label.as_str(), mean_of(acc))),
        )
    }
}

// Accumulators are only created when a row is added, so count >= 1.
fn mean_of(acc: &Accumulator) -> f64 {
    acc.sum / acc.count as f64
}

/// Normalize and parse the metric field of one record.
pub(crate) fn normalized_metric<N>(
    record: &Record,
    row: usize,
    column: usize,
    normalizer: &N,
) -> Result<f64>
where
    N: MetricNormalizer + ?Sized,
{
    let raw = record.field(column)?;
    let normalized = normalizer.normalize(raw);
    parse_number(&normalized).ok_or_else(|| DataError::Parse {
        row,
        column,
        value: raw.to_string(),
    })
}

/// Mean of `metric` per value of `category`.
///
/// The metric is passed through `normalizer` before parsing, so bucketed
/// strings such as `"1,000,000+"` can be averaged.
pub fn build_engagement_table<N>(
    dataset: &Dataset,
    category: usize,
    metric: usize,
    normalizer: &N,
) -> Result<EngagementTable>
where
    N: MetricNormalizer + ?Sized,
{
    let mut table = EngagementTable::default();
    for (idx, record) in dataset.iter().enumerate() {
        let label = record.field(category)?;
        let value = normalized_metric(record, idx + 1, metric, normalizer)?;
        let acc = table.categories.entry(label.to_string()).or_default();
        acc.sum += value;
        acc.count += 1;
    }
    tracing::debug!(
        category,
        metric,
        categories = table.len(),
        "built engagement table"
    );
    Ok(table)
}
