//! Load, clean and aggregate one dataset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use aps_aggregate::{build_engagement_table, build_frequency_table};
use aps_clean::clean_dataset;
use aps_ingest::read_dataset;
use aps_model::{Dataset, DatasetProfile};
use tracing::info_span;

use crate::config::DatasetJob;
use crate::types::{CategoryTable, DatasetReport, TableKind};

/// Run the full pipeline for `job`.
pub fn analyze(job: &DatasetJob) -> Result<DatasetReport> {
    let span = info_span!("dataset", label = %job.label, profile = %job.profile.name);
    let _guard = span.enter();
    let dataset = read_dataset(&job.path, &job.profile.load)?;
    let mut report = analyze_dataset(&job.label, &job.profile, &dataset)
        .with_context(|| format!("analyse {}", job.path.display()))?;
    report.path.clone_from(&job.path);
    Ok(report)
}

/// Clean an already loaded dataset and build its category tables.
pub fn analyze_dataset(
    label: &str,
    profile: &DatasetProfile,
    dataset: &Dataset,
) -> aps_model::Result<DatasetReport> {
    let outcome = clean_dataset(dataset, profile)?;
    let clean = &outcome.dataset;

    let mut frequency = Vec::with_capacity(profile.frequency_columns.len());
    for column in &profile.frequency_columns {
        let index = clean.resolve(column)?;
        let table = build_frequency_table(clean, index)?;
        frequency.push(CategoryTable {
            kind: TableKind::Share,
            column: column_name(clean, index),
            metric: None,
            entries: table.ranked(),
        });
    }

    let engagement = match &profile.engagement {
        Some(spec) => {
            let category = clean.resolve(&spec.category_column)?;
            let metric = clean.resolve(&spec.metric_column)?;
            let table = build_engagement_table(clean, category, metric, &spec.normalizer)?;
            Some(CategoryTable {
                kind: TableKind::Mean,
                column: column_name(clean, category),
                metric: Some(column_name(clean, metric)),
                entries: table.ranked(),
            })
        }
        None => None,
    };

    Ok(DatasetReport {
        label: label.to_string(),
        profile: profile.name.clone(),
        path: PathBuf::new(),
        rows_loaded: dataset.len(),
        rows_clean: clean.len(),
        drop_counts: outcome.dropped.counts_by_kind(),
        stages: outcome.stages,
        dropped: outcome.dropped,
        frequency,
        engagement,
    })
}

/// Header text of `index`, or `#index` when the header cell is blank.
pub fn column_name(dataset: &Dataset, index: usize) -> String {
    match dataset.header().get(index) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("#{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aps_model::{ColumnRef, EngagementSpec, Normalizer};

    fn apple_rows() -> Dataset {
        let header = vec![
            "", "id", "track_name", "size_bytes", "currency", "price", "rating_count_tot",
            "rating_count_ver", "user_rating", "user_rating_ver", "ver", "cont_rating",
            "prime_genre", "sup_devices.num", "ipadSc_urls.num", "lang.num", "vpp_lic",
        ];
        let row = |name: &str, price: &str, reviews: &str, genre: &str| {
            vec![
                "1".to_string(), "1".to_string(), name.to_string(), "100".to_string(),
                "USD".to_string(), price.to_string(), reviews.to_string(), "1".to_string(),
                "4.5".to_string(), "4.5".to_string(), "1.0".to_string(), "4+".to_string(),
                genre.to_string(), "38".to_string(), "5".to_string(), "10".to_string(),
                "1".to_string(),
            ]
        };
        let mut rows = vec![header.into_iter().map(str::to_string).collect::<Vec<_>>()];
        rows.push(row("Waze", "0.0", "345046", "Navigation"));
        rows.push(row("Google Maps", "0.0", "154911", "Navigation"));
        rows.push(row("Pandora", "0.0", "1126879", "Music"));
        rows.push(row("Minecraft", "6.99", "522012", "Games"));
        Dataset::from_rows(rows)
    }

    #[test]
    fn custom_profile_report() {
        let profile = DatasetProfile {
            name_column: ColumnRef::Index(2),
            review_column: ColumnRef::Index(6),
            price_column: ColumnRef::Index(5),
            engagement: Some(EngagementSpec {
                category_column: ColumnRef::Index(-5),
                metric_column: ColumnRef::Index(6),
                normalizer: Normalizer::Verbatim,
            }),
            ..DatasetProfile::apple_store()
        };
        let report = analyze_dataset("sample", &profile, &apple_rows()).unwrap();
        assert_eq!(report.rows_loaded, 4);
        assert_eq!(report.rows_clean, 3);
        assert_eq!(report.drop_counts.get("not_free"), Some(&1));

        let share = &report.frequency[0];
        assert_eq!(share.column, "prime_genre");
        assert_eq!(share.entries[0].label, "Navigation");

        let engagement = report.engagement.unwrap();
        assert_eq!(engagement.metric.as_deref(), Some("rating_count_tot"));
        assert_eq!(engagement.entries[0].label, "Music");
        assert_eq!(engagement.entries[1].value, 249_978.5);
    }

    #[test]
    fn blank_header_falls_back_to_index() {
        assert_eq!(column_name(&apple_rows(), 0), "#0");
        assert_eq!(column_name(&apple_rows(), 2), "track_name");
    }
}
