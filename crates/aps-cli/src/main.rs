//! App profile study CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use aps_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_duplicates, run_explore, run_members, run_profiles, run_report};
use crate::summary::{
    print_duplicates, print_explore, print_members, print_profiles, print_reports,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Report(args) => {
            let reports = run_report(&args)?;
            print_reports(&reports, args.output_format(), args.show_drops)
        }
        Command::Explore(args) => {
            print_explore(&run_explore(&args)?);
            Ok(())
        }
        Command::Duplicates(args) => {
            print_duplicates(&run_duplicates(&args)?);
            Ok(())
        }
        Command::Members(args) => {
            print_members(&run_members(&args)?);
            Ok(())
        }
        Command::Profiles => {
            print_profiles(&run_profiles());
            Ok(())
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file.clone_from(&cli.log_file);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
