//! Category tables over cleaned catalogs.
//!
//! - [`build_frequency_table`]: share of apps per category, in percent
//! - [`build_engagement_table`]: mean of a numeric column per category
//! - [`sort_descending`]: the ordering every report table uses
//! - [`category_members`]: the apps behind one category's figure

pub mod engagement;
pub mod frequency;
pub mod members;
pub mod rank;

pub use aps_model::{MetricNormalizer, Normalizer};
pub use engagement::{EngagementTable, build_engagement_table};
pub use frequency::{FrequencyTable, build_frequency_table};
pub use members::category_members;
pub use rank::{RankedEntry, sort_descending};
