//! TOML analysis configuration: which dataset files to load, with which
//! profile.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aps_model::DatasetProfile;
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "aps.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub datasets: Vec<DatasetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetEntry {
    /// Display name; defaults to the file stem.
    #[serde(default)]
    pub label: Option<String>,
    pub path: PathBuf,
    pub profile: ProfileSource,
}

/// Either a built-in profile name or a full inline profile table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileSource {
    Builtin(String),
    Inline(Box<DatasetProfile>),
}

impl ProfileSource {
    pub fn resolve(self) -> aps_model::Result<DatasetProfile> {
        match self {
            Self::Builtin(name) => DatasetProfile::builtin(&name),
            Self::Inline(profile) => Ok(*profile),
        }
    }
}

/// One dataset ready to be analysed.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetJob {
    pub label: String,
    pub path: PathBuf,
    pub profile: DatasetProfile,
}

impl DatasetJob {
    pub fn new(label: Option<String>, path: PathBuf, mut profile: DatasetProfile) -> Self {
        let label = label.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });
        if profile.name.is_empty() {
            profile.name.clone_from(&label);
        }
        Self {
            label,
            path,
            profile,
        }
    }

    /// A dataset analysed with a built-in profile.
    pub fn builtin(profile: &str, path: PathBuf) -> Result<Self> {
        let profile = DatasetProfile::builtin(profile)?;
        Ok(Self::new(None, path, profile))
    }
}

impl AnalysisConfig {
    /// Parse a config file. Relative dataset paths are resolved against the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut config.datasets {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        tracing::debug!(
            path = %path.display(),
            datasets = config.datasets.len(),
            "loaded analysis config"
        );
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve every entry's profile.
    pub fn into_jobs(self) -> Result<Vec<DatasetJob>> {
        self.datasets
            .into_iter()
            .map(|entry| {
                let profile = entry
                    .profile
                    .resolve()
                    .with_context(|| format!("dataset {}", entry.path.display()))?;
                Ok(DatasetJob::new(entry.label, entry.path, profile))
            })
            .collect()
    }
}

/// Read a standalone profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<DatasetProfile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read profile {}", path.display()))?;
    let mut profile: DatasetProfile =
        toml::from_str(&text).with_context(|| format!("parse profile {}", path.display()))?;
    if profile.name.is_empty() {
        profile.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(profile)
}
