//! Share of rows per category.

use std::collections::BTreeMap;

use aps_model::{Dataset, Result};
use serde::Serialize;

use crate::rank::{RankedEntry, sort_descending};

/// Per-category row counts over one column of a dataset.
///
/// Percentages are derived on demand and sum to 100 over all labels of a
/// non-empty table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Rows counted, across all labels.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    pub fn percent(&self, label: &str) -> Option<f64> {
        self.count(label).map(|count| self.as_percent(count))
    }

    pub fn percentages(&self) -> BTreeMap<String, f64> {
        self.counts
            .iter()
            .map(|(label, count)| (label.clone(), self.as_percent(*count)))
            .collect()
    }

    /// Labels with their percentage, highest first.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        sort_descending(
            self.counts
                .iter()
                .map(|(label, count)| (label.as_str(), self.as_percent(*count))),
        )
    }

    fn as_percent(&self, count: usize) -> f64 {
        count as f64 / self.total as f64 * 100.0
    }
}

/// Count how often each value of `column` occurs.
///
/// Fails with `DataError::ColumnOutOfRange` if a record is too short.
pub fn build_frequency_table(dataset: &Dataset, column: usize) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::default();
    for record in dataset {
        let label = record.field(column)?;
        *table.counts.entry(label.to_string()).or_insert(0) += 1;
        table.total += 1;
    }
    tracing::debug!(
        column,
        rows = table.total,
        labels = table.len(),
        "built frequency table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aps_model::DataError;

    fn categories(labels: &[&str]) -> Dataset {
        let mut rows = vec![vec!["App".to_string(), "Category".to_string()]];
        for (idx, label) in labels.iter().enumerate() {
            rows.push(vec![format!("app-{idx}"), (*label).to_string()]);
        }
        Dataset::from_rows(rows)
    }

    #[test]
    fn two_thirds_one_third() {
        let table = build_frequency_table(&categories(&["X", "X", "Y"]), 1).unwrap();
        assert_eq!(table.total(), 3);
        assert!((table.percent("X").unwrap() - 66.666_666_666).abs() < 1e-6);
        assert!((table.percent("Y").unwrap() - 33.333_333_333).abs() < 1e-6);
        assert_eq!(table.percent("Z"), None);
    }

    #[test]
    fn ranked_view_is_descending() {
        let table = build_frequency_table(&categories(&["GAME", "FAMILY", "GAME", "TOOLS", "FAMILY", "GAME"]), 1)
            .unwrap();
        let labels: Vec<String> = table.ranked().into_iter().map(|entry| entry.label).collect();
        assert_eq!(labels, vec!["GAME", "FAMILY", "TOOLS"]);
    }

    #[test]
    fn empty_dataset_gives_empty_table() {
        let table = build_frequency_table(&categories(&[]), 1).unwrap();
        assert!(table.is_empty());
        assert!(table.percentages().is_empty());
        assert!(table.ranked().is_empty());
    }

    #[test]
    fn out_of_range_column() {
        assert!(matches!(
            build_frequency_table(&categories(&["X"]), 4),
            Err(DataError::ColumnOutOfRange { index: 4, width: 2 })
        ));
    }
}
