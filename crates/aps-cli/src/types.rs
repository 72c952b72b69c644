use std::collections::BTreeMap;
use std::path::PathBuf;

use aps_aggregate::RankedEntry;
use aps_clean::{DropLog, StageSummary};
use serde::Serialize;

/// Everything `aps report` prints for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub label: String,
    pub profile: String,
    pub path: PathBuf,
    pub rows_loaded: usize,
    pub rows_clean: usize,
    pub stages: Vec<StageSummary>,
    pub drop_counts: BTreeMap<&'static str, usize>,
    /// Full drop log; printed only with `--show-drops`.
    #[serde(skip)]
    pub dropped: DropLog,
    pub frequency: Vec<CategoryTable>,
    pub engagement: Option<CategoryTable>,
}

/// What a ranked table measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Percent of apps per category.
    Share,
    /// Mean metric per category.
    Mean,
}

/// One ranked category table.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTable {
    pub kind: TableKind,
    /// Header name of the category column.
    pub column: String,
    /// Header name of the averaged column, for [`TableKind::Mean`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    pub entries: Vec<RankedEntry>,
}

impl CategoryTable {
    pub fn title(&self) -> String {
        match (&self.kind, &self.metric) {
            (TableKind::Mean, Some(metric)) => format!("mean {metric} by {}", self.column),
            (TableKind::Mean, None) => format!("mean by {}", self.column),
            (TableKind::Share, _) => format!("share of apps by {}", self.column),
        }
    }
}
