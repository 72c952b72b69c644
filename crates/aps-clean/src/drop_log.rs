//! Informational log of rows excluded by the filters.

use std::collections::BTreeMap;
use std::fmt;

use aps_model::Dataset;
use serde::Serialize;

/// Why a filter excluded a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropReason {
    /// Field count differs from the header.
    SchemaMismatch { expected: usize, found: usize },
    /// Another row with the same key was kept. `max` is the key's highest
    /// metric; `metric` is this row's own value.
    Duplicate { metric: f64, max: f64 },
    /// Name carries more non-ASCII characters than the threshold allows.
    NonEnglishName { non_ascii: usize },
    /// Price field does not mark the app as free.
    NotFree { price: String },
}

impl DropReason {
    /// Short stable name for grouping.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. } => "schema_mismatch",
            Self::Duplicate { .. } => "duplicate",
            Self::NonEnglishName { .. } => "non_english_name",
            Self::NotFree { .. } => "not_free",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaMismatch { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::Duplicate { metric, max } => {
                write!(f, "duplicate (metric {metric}, kept {max})")
            }
            Self::NonEnglishName { non_ascii } => {
                write!(f, "{non_ascii} non-ASCII characters in name")
            }
            Self::NotFree { price } => write!(f, "not free (price '{price}')"),
        }
    }
}

/// One excluded row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRow {
    /// 1-based position among the data rows the filter received.
    pub row: usize,
    /// App name, when the filter knows which column holds it.
    pub key: Option<String>,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DropLog {
    entries: Vec<DroppedRow>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, row: usize, key: Option<&str>, reason: DropReason) {
        tracing::debug!(
            row,
            key = key.unwrap_or("-"),
            reason = %reason,
            "dropped row"
        );
        self.entries.push(DroppedRow {
            row,
            key: key.map(str::to_string),
            reason,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DroppedRow> {
        self.entries.iter()
    }

    pub fn extend(&mut self, other: DropLog) {
        self.entries.extend(other.entries);
    }

    /// Number of dropped rows per [`DropReason::kind`].
    pub fn counts_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.reason.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a DropLog {
    type Item = &'a DroppedRow;
    type IntoIter = std::slice::Iter<'a, DroppedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Output of a single filter: the kept rows plus what was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned {
    pub dataset: Dataset,
    pub dropped: DropLog,
}
