//! Core data model for app catalog profiling.
//!
//! A catalog is a [`Dataset`]: a header [`Record`] followed by data records
//! that are only addressable by position. [`DatasetProfile`] captures where a
//! storefront keeps the name, review count, price and category fields and
//! how it marks an app as free.

pub mod dataset;
pub mod error;
pub mod numeric;
pub mod profile;

pub use dataset::{ColumnRef, Dataset, Record};
pub use error::{DataError, Result};
pub use numeric::{parse_field, parse_number};
pub use profile::{
    BUILTIN_PROFILES, DEFAULT_NON_ASCII_THRESHOLD, DatasetProfile, EngagementSpec, LoadOptions,
    MetricNormalizer, Normalizer, PriceRule,
};
