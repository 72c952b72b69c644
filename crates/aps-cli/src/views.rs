//! Data behind the single-file subcommands: `explore`, `duplicates` and
//! `members`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use aps_aggregate::{RankedEntry, category_members};
use aps_clean::{DuplicateSummary, clean_dataset, count_duplicates, duplicates_of};
use aps_ingest::read_dataset;
use aps_model::{Dataset, DatasetProfile, Record};
use tracing::info_span;

use crate::analysis::column_name;
use crate::config::load_profile;

/// A loaded dataset with the profile it was read under.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub profile: DatasetProfile,
    pub dataset: Dataset,
}

impl LoadedDataset {
    /// Read `file` with a built-in profile, or with the TOML profile at
    /// `profile_file` when given.
    pub fn open(file: &Path, profile: &str, profile_file: Option<&Path>) -> Result<Self> {
        let profile = match profile_file {
            Some(path) => load_profile(path)?,
            None => DatasetProfile::builtin(profile)?,
        };
        let dataset = read_dataset(file, &profile.load)?;
        Ok(Self { profile, dataset })
    }
}

#[derive(Debug, Clone)]
pub struct ExploreView {
    pub header: Record,
    pub rows: Vec<Record>,
    pub start: usize,
    /// `(rows, columns)` when requested.
    pub shape: Option<(usize, usize)>,
}

/// Rows `start..end`, clamped to the dataset.
pub fn explore(loaded: &LoadedDataset, start: usize, end: usize, shape: bool) -> ExploreView {
    let dataset = &loaded.dataset;
    ExploreView {
        header: dataset.header().clone(),
        rows: dataset.slice(start, end).to_vec(),
        start,
        shape: shape.then(|| (dataset.len(), dataset.width())),
    }
}

#[derive(Debug, Clone)]
pub struct DuplicatesView {
    pub column: String,
    pub summary: DuplicateSummary,
    /// Most repeated names: by copy count, highest first, then by name.
    pub top: Vec<(String, usize)>,
    /// Header plus every row carrying the requested name.
    pub matches: Option<(Record, Vec<Record>)>,
}

/// Duplicate counts over the profile's name column, on the raw dataset.
pub fn duplicates(loaded: &LoadedDataset, name: Option<&str>, top: usize) -> Result<DuplicatesView> {
    let dataset = &loaded.dataset;
    let key = dataset.resolve(&loaded.profile.name_column)?;
    let summary = count_duplicates(dataset, key)?;
    let mut repeated: Vec<(String, usize)> = summary
        .repeated
        .iter()
        .map(|(name, count)| (name.clone(), *count))
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    repeated.truncate(top);
    let matches = match name {
        Some(name) => {
            let rows = duplicates_of(dataset, key, name)?
                .into_iter()
                .cloned()
                .collect();
            Some((dataset.header().clone(), rows))
        }
        None => None,
    };
    Ok(DuplicatesView {
        column: column_name(dataset, key),
        summary,
        top: repeated,
        matches,
    })
}

#[derive(Debug, Clone)]
pub struct MembersView {
    pub category: String,
    pub metric: String,
    pub members: Vec<RankedEntry>,
}

impl MembersView {
    /// Mean metric over the listed apps.
    pub fn mean(&self) -> Option<f64> {
        if self.members.is_empty() {
            return None;
        }
        let total: f64 = self.members.iter().map(|entry| entry.value).sum();
        Some(total / self.members.len() as f64)
    }
}

/// Apps of `category` in the cleaned dataset, highest engagement first.
pub fn members(loaded: &LoadedDataset, category: &str) -> Result<MembersView> {
    let profile = &loaded.profile;
    let span = info_span!("members", profile = %profile.name, category);
    let _guard = span.enter();
    let Some(spec) = &profile.engagement else {
        bail!("profile '{}' has no engagement columns", profile.name);
    };
    let outcome = clean_dataset(&loaded.dataset, profile)
        .with_context(|| format!("clean dataset for profile '{}'", profile.name))?;
    let clean = &outcome.dataset;
    let category_column = clean.resolve(&spec.category_column)?;
    let metric = clean.resolve(&spec.metric_column)?;
    let name = clean.resolve(&profile.name_column)?;
    let members = category_members(
        clean,
        category_column,
        category,
        name,
        metric,
        &spec.normalizer,
    )?;
    Ok(MembersView {
        category: category.to_string(),
        metric: column_name(clean, metric),
        members,
    })
}
