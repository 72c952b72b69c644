//! Profile-driven cleaning: schema, dedupe, charset and price filters in
//! that order.

use std::fmt;

use aps_model::{Dataset, DatasetProfile, Result};
use serde::Serialize;
use tracing::info;

use crate::charset::filter_charset;
use crate::dedupe::dedupe_by_max_metric;
use crate::drop_log::{Cleaned, DropLog};
use crate::price::filter_price;
use crate::schema::filter_schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Schema,
    Dedupe,
    Charset,
    Price,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Schema, Stage::Dedupe, Stage::Charset, Stage::Price];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Schema => "schema",
            Stage::Dedupe => "dedupe",
            Stage::Charset => "english names",
            Stage::Price => "free only",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row counts before and after one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageSummary {
    pub fn dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Result of running every cleaning stage over one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub dataset: Dataset,
    pub stages: Vec<StageSummary>,
    pub dropped: DropLog,
}

/// Profile columns resolved to field indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanColumns {
    pub name: usize,
    pub review: usize,
    pub price: usize,
}

impl CleanColumns {
    pub fn resolve(dataset: &Dataset, profile: &DatasetProfile) -> Result<Self> {
        Ok(Self {
            name: dataset.resolve(&profile.name_column)?,
            review: dataset.resolve(&profile.review_column)?,
            price: dataset.resolve(&profile.price_column)?,
        })
    }
}

/// Run the four filters described by `profile` over `dataset`.
///
/// Dropped rows go to the returned log; only unresolvable columns and
/// non-numeric review counts or prices are errors.
pub fn clean_dataset(dataset: &Dataset, profile: &DatasetProfile) -> Result<CleanOutcome> {
    let columns = CleanColumns::resolve(dataset, profile)?;
    let mut tracker = StageTracker::default();

    let current = tracker.run(Stage::Schema, dataset, |input| Ok(filter_schema(input)))?;
    let current = tracker.run(Stage::Dedupe, &current, |input| {
        dedupe_by_max_metric(input, columns.name, columns.review)
    })?;
    let current = tracker.run(Stage::Charset, &current, |input| {
        filter_charset(input, columns.name, profile.non_ascii_threshold)
    })?;
    let current = tracker.run(Stage::Price, &current, |input| {
        filter_price(input, columns.price, &profile.price_rule)
    })?;

    Ok(CleanOutcome {
        dataset: current,
        stages: tracker.stages,
        dropped: tracker.dropped,
    })
}

#[derive(Default)]
struct StageTracker {
    stages: Vec<StageSummary>,
    dropped: DropLog,
}

impl StageTracker {
    fn run<F>(&mut self, stage: Stage, input: &Dataset, filter: F) -> Result<Dataset>
    where
        F: FnOnce(&Dataset) -> Result<Cleaned>,
    {
        let Cleaned { dataset, dropped } = filter(input)?;
        let summary = StageSummary {
            stage,
            rows_in: input.len(),
            rows_out: dataset.len(),
        };
        info!(
            stage = %stage,
            rows_in = summary.rows_in,
            rows_out = summary.rows_out,
            dropped = summary.dropped(),
            "cleaning stage complete"
        );
        self.stages.push(summary);
        self.dropped.extend(dropped);
        Ok(dataset)
    }
}
