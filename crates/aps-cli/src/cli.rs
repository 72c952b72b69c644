//! CLI argument definitions for the app profile study.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aps",
    version,
    about = "App profile study - clean storefront catalogs and rank app categories",
    long_about = "Load app storefront catalogs (App Store, Google Play), drop malformed,\n\
                  duplicate, non-English and paid entries, then rank categories by\n\
                  share of apps and by average engagement."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean every configured dataset and print its category tables.
    Report(ReportArgs),

    /// Print a slice of rows from a dataset file.
    Explore(ExploreArgs),

    /// Count unique and repeated app names.
    Duplicates(DuplicatesArgs),

    /// List the apps of one category with their engagement metric.
    Members(MembersArgs),

    /// List the built-in dataset profiles.
    Profiles,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// TOML file listing datasets (default: ./aps.toml when present).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// App Store catalog, analysed with the `apple` profile.
    #[arg(long = "apple", value_name = "FILE")]
    pub apple: Option<PathBuf>,

    /// Google Play catalog, analysed with the `google` profile.
    #[arg(long = "google", value_name = "FILE")]
    pub google: Option<PathBuf>,

    /// Output format for the report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Shorthand for `--format json`.
    #[arg(long = "json", conflicts_with = "format")]
    pub json: bool,

    /// Also print every dropped row with its reason.
    #[arg(long = "show-drops")]
    pub show_drops: bool,
}

impl ReportArgs {
    pub fn output_format(&self) -> OutputFormatArg {
        if self.json {
            OutputFormatArg::Json
        } else {
            self.format
        }
    }
}

/// Dataset file plus the profile describing its columns.
#[derive(Args)]
pub struct DatasetArgs {
    /// Dataset file (delimited text with a header row).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Built-in profile name (see `aps profiles`).
    #[arg(long = "profile", value_name = "NAME", default_value = "apple")]
    pub profile: String,

    /// TOML file holding a custom profile; replaces `--profile`.
    #[arg(long = "profile-file", value_name = "FILE")]
    pub profile_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// First data row to print (0-based).
    #[arg(long = "start", default_value_t = 0)]
    pub start: usize,

    /// Row after the last one to print.
    #[arg(long = "end", default_value_t = 5)]
    pub end: usize,

    /// Also print the number of rows and columns.
    #[arg(long = "shape")]
    pub shape: bool,
}

#[derive(Parser)]
pub struct DuplicatesArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Print every row carrying this app name.
    #[arg(long = "name", value_name = "APP")]
    pub name: Option<String>,

    /// Number of most repeated names to list.
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,
}

#[derive(Parser)]
pub struct MembersArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Category label to list, as it appears in the data.
    #[arg(long = "category", value_name = "LABEL")]
    pub category: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Bordered tables.
    Table,
    /// `label : value` lines.
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
