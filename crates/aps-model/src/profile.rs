//! Dataset profiles: per-storefront column positions and cleaning rules.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::dataset::ColumnRef;
use crate::error::{DataError, Result};

/// Maximum number of characters above code point 127 a name may carry and
/// still be treated as English.
pub const DEFAULT_NON_ASCII_THRESHOLD: usize = 3;

/// Names accepted by [`DatasetProfile::builtin`].
pub const BUILTIN_PROFILES: &[&str] = &["apple", "google"];

/// How a storefront marks an app as free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRule {
    /// The price field must equal this label exactly (e.g. `"Free"`).
    Label { free: String },
    /// The price field must parse as a number equal to `free`.
    Numeric {
        #[serde(default)]
        free: f64,
    },
}

impl PriceRule {
    pub fn label(free: impl Into<String>) -> Self {
        Self::Label { free: free.into() }
    }

    /// Numeric price that must be exactly `0.0`.
    pub fn zero() -> Self {
        Self::Numeric { free: 0.0 }
    }
}

/// Text clean-up applied to a metric field before it is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Normalizer {
    /// Parse the field as it is.
    #[default]
    Verbatim,
    /// Remove every occurrence of the listed characters (e.g. `"+,"` turns
    /// `"1,000,000+"` into `"1000000"`).
    StripChars { chars: String },
}

impl Normalizer {
    pub fn strip(chars: impl Into<String>) -> Self {
        Self::StripChars {
            chars: chars.into(),
        }
    }

    pub fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(raw),
            Self::StripChars { chars } => {
                if raw.contains(|ch: char| chars.contains(ch)) {
                    Cow::Owned(raw.chars().filter(|ch| !chars.contains(*ch)).collect())
                } else {
                    Cow::Borrowed(raw)
                }
            }
        }
    }
}

/// Turns a raw metric field into text that parses as a number.
///
/// Implemented by [`Normalizer`] and by any `Fn(&str) -> String`, so callers
/// can pass a closure for one-off formats.
pub trait MetricNormalizer {
    fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

impl MetricNormalizer for Normalizer {
    fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        self.apply(raw)
    }
}

impl<F> MetricNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(raw))
    }
}

/// Options for reading a delimited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Field separator. Must be a single ASCII character.
    pub delimiter: char,
    /// Whether double quotes delimit fields that contain the separator.
    pub quoting: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quoting: true,
        }
    }
}

/// Columns used to compute the average-engagement table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngagementSpec {
    pub category_column: ColumnRef,
    pub metric_column: ColumnRef,
    #[serde(default)]
    pub normalizer: Normalizer,
}

/// Positional schema and cleaning rules for one storefront's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetProfile {
    /// Short profile name (e.g. `apple`). May be left out of inline
    /// profiles in a config file.
    #[serde(default)]
    pub name: String,

    /// Free-form description shown by `aps profiles`.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub load: LoadOptions,

    /// Column holding the app name. Used as the deduplication key and by the
    /// character-set filter.
    pub name_column: ColumnRef,

    /// Column holding the review count used to pick the canonical duplicate.
    pub review_column: ColumnRef,

    pub price_column: ColumnRef,
    pub price_rule: PriceRule,

    #[serde(default = "default_threshold")]
    pub non_ascii_threshold: usize,

    /// Columns tabulated as frequency tables, in report order.
    #[serde(default)]
    pub frequency_columns: Vec<ColumnRef>,

    #[serde(default)]
    pub engagement: Option<EngagementSpec>,
}

fn default_threshold() -> usize {
    DEFAULT_NON_ASCII_THRESHOLD
}

impl DatasetProfile {
    /// Look up a built-in profile by name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "apple" | "app_store" | "appstore" => Ok(Self::apple_store()),
            "google" | "google_play" | "googleplay" => Ok(Self::google_play()),
            _ => Err(DataError::UnknownProfile {
                name: name.to_string(),
                known: BUILTIN_PROFILES.join(", "),
            }),
        }
    }

    /// All built-in profiles, in [`BUILTIN_PROFILES`] order.
    pub fn builtins() -> Vec<Self> {
        vec![Self::apple_store(), Self::google_play()]
    }

    /// Apple App Store export (`AppleStore.csv`, 16 columns).
    ///
    /// Price is numeric, the genre is the fifth column from the end, and the
    /// engagement metric is the total rating count.
    pub fn apple_store() -> Self {
        Self {
            name: "apple".to_string(),
            description: "Apple App Store catalog (AppleStore.csv)".to_string(),
            load: LoadOptions::default(),
            name_column: ColumnRef::Index(1),
            review_column: ColumnRef::Index(5),
            price_column: ColumnRef::Index(4),
            price_rule: PriceRule::zero(),
            non_ascii_threshold: DEFAULT_NON_ASCII_THRESHOLD,
            frequency_columns: vec![ColumnRef::Index(-5)],
            engagement: Some(EngagementSpec {
                category_column: ColumnRef::Index(-5),
                metric_column: ColumnRef::Index(5),
                normalizer: Normalizer::Verbatim,
            }),
        }
    }

    /// Google Play export (`googleplaystore.csv`, 13 columns).
    ///
    /// Free apps carry the `Type` label `"Free"`, and installs are bucketed
    /// strings such as `"1,000,000+"`.
    pub fn google_play() -> Self {
        Self {
            name: "google".to_string(),
            description: "Google Play catalog (googleplaystore.csv)".to_string(),
            load: LoadOptions::default(),
            name_column: ColumnRef::Index(0),
            review_column: ColumnRef::Index(3),
            price_column: ColumnRef::Index(6),
            price_rule: PriceRule::label("Free"),
            non_ascii_threshold: DEFAULT_NON_ASCII_THRESHOLD,
            frequency_columns: vec![ColumnRef::Index(9), ColumnRef::Index(1), ColumnRef::Index(5)],
            engagement: Some(EngagementSpec {
                category_column: ColumnRef::Index(1),
                metric_column: ColumnRef::Index(5),
                normalizer: Normalizer::strip("+,"),
            }),
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.non_ascii_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_load_options(mut self, load: LoadOptions) -> Self {
        self.load = load;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        assert_eq!(DatasetProfile::builtin("Apple").unwrap().name, "apple");
        assert_eq!(DatasetProfile::builtin("google_play").unwrap().name, "google");
    }

    #[test]
    fn unknown_builtin_lists_known_names() {
        let err = DatasetProfile::builtin("amazon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown dataset profile 'amazon' (expected one of: apple, google)"
        );
    }

    #[test]
    fn google_play_tabulates_genres_category_and_installs() {
        assert_eq!(
            DatasetProfile::google_play().frequency_columns,
            vec![ColumnRef::Index(9), ColumnRef::Index(1), ColumnRef::Index(5)]
        );
    }

    #[test]
    fn strip_normalizer_removes_decorations() {
        let normalizer = Normalizer::strip("+,");
        assert_eq!(normalizer.apply("1,000,000+"), "1000000");
        assert!(matches!(normalizer.apply("500"), Cow::Borrowed("500")));
        assert_eq!(Normalizer::Verbatim.apply("1,000+"), "1,000+");
    }

    #[test]
    fn closures_are_normalizers() {
        let dollars = |raw: &str| raw.trim_start_matches('$').to_string();
        assert_eq!(dollars.normalize("$4.99"), "4.99");
    }
}
