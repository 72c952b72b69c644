use std::path::Path;

use anyhow::{Result, bail};
use aps_model::DatasetProfile;

use aps_cli::analysis::analyze;
use aps_cli::config::{AnalysisConfig, DEFAULT_CONFIG_FILE, DatasetJob};
use aps_cli::types::DatasetReport;
use aps_cli::views::{
    DuplicatesView, ExploreView, LoadedDataset, MembersView, duplicates, explore, members,
};

use crate::cli::{DatasetArgs, DuplicatesArgs, ExploreArgs, MembersArgs, ReportArgs};

pub fn run_report(args: &ReportArgs) -> Result<Vec<DatasetReport>> {
    let jobs = report_jobs(args)?;
    if jobs.is_empty() {
        bail!(
            "no datasets configured; pass --apple/--google or a --config file \
             (or create {DEFAULT_CONFIG_FILE})"
        );
    }
    jobs.iter().map(analyze).collect()
}

fn report_jobs(args: &ReportArgs) -> Result<Vec<DatasetJob>> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => Some(Path::new(DEFAULT_CONFIG_FILE).to_path_buf()).filter(|path| path.is_file()),
    };
    let mut jobs = match config_path {
        Some(path) => AnalysisConfig::load(&path)?.into_jobs()?,
        None => Vec::new(),
    };
    if let Some(path) = &args.apple {
        jobs.push(DatasetJob::builtin("apple", path.clone())?);
    }
    if let Some(path) = &args.google {
        jobs.push(DatasetJob::builtin("google", path.clone())?);
    }
    Ok(jobs)
}

fn load(args: &DatasetArgs) -> Result<LoadedDataset> {
    LoadedDataset::open(&args.file, &args.profile, args.profile_file.as_deref())
}

pub fn run_explore(args: &ExploreArgs) -> Result<ExploreView> {
    let loaded = load(&args.dataset)?;
    Ok(explore(&loaded, args.start, args.end, args.shape))
}

pub fn run_duplicates(args: &DuplicatesArgs) -> Result<DuplicatesView> {
    let loaded = load(&args.dataset)?;
    duplicates(&loaded, args.name.as_deref(), args.top)
}

pub fn run_members(args: &MembersArgs) -> Result<MembersView> {
    let loaded = load(&args.dataset)?;
    members(&loaded, &args.category)
}

pub fn run_profiles() -> Vec<DatasetProfile> {
    DatasetProfile::builtins()
}
