//! Catalog cleaning.
//!
//! Each filter borrows a [`Dataset`](aps_model::Dataset) and returns a new
//! one together with a [`DropLog`] of the rows it excluded. Dropping a row is
//! never an error; a review count or price that does not parse is.
//!
//! [`clean_dataset`] chains the filters in the order the analysis needs
//! them:
//!
//! 1. [`filter_schema`]: wrong field count
//! 2. [`dedupe_by_max_metric`]: one row per app name, most reviews wins
//! 3. [`filter_charset`]: names that look non-English
//! 4. [`filter_price`]: paid apps

pub mod charset;
pub mod dedupe;
pub mod drop_log;
pub mod pipeline;
pub mod price;
pub mod schema;

pub use charset::{DEFAULT_NON_ASCII_THRESHOLD, filter_charset, is_probably_english, non_ascii_count};
pub use dedupe::{
    DuplicateSummary, ReviewIndex, count_duplicates, dedupe_by_max_metric, duplicates_of,
};
pub use drop_log::{Cleaned, DropLog, DropReason, DroppedRow};
pub use pipeline::{CleanColumns, CleanOutcome, Stage, StageSummary, clean_dataset};
pub use price::{filter_price, is_free};
pub use schema::filter_schema;
