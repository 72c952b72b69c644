//! Library side of the `aps` binary: configuration, the per-dataset
//! analysis driver, report types, plain-text rendering and the data behind
//! the single-file subcommands.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod render;
pub mod types;
pub mod views;
