//! Drill-down: the apps behind one category's average.

use aps_model::{Dataset, MetricNormalizer, Result};

use crate::engagement::normalized_metric;
use crate::rank::{RankedEntry, sort_descending};

/// Every record whose `category` field equals `label`, as `(name, metric)`
/// pairs sorted by metric, highest first.
///
/// A few very popular apps can dominate a category mean; this listing shows
/// whether that is the case.
pub fn category_members<N>(
    dataset: &Dataset,
    category: usize,
    label: &str,
    name: usize,
    metric: usize,
    normalizer: &N,
) -> Result<Vec<RankedEntry>>
where
    N: MetricNormalizer + ?Sized,
{
    let mut members = Vec::new();
    for (idx, record) in dataset.iter().enumerate() {
        if record.field(category)? != label {
            continue;
        }
        let value = normalized_metric(record, idx + 1, metric, normalizer)?;
        members.push((record.field(name)?, value));
    }
    Ok(sort_descending(members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aps_model::Normalizer;

    #[test]
    fn lists_one_category() {
        let dataset = Dataset::from_rows(vec![
            vec!["id", "track_name", "rating_count_tot", "prime_genre"],
            vec!["1", "Waze - GPS Navigation, Maps & Real-time Traffic", "345046", "Navigation"],
            vec!["2", "Google Maps - Navigation & Transit", "154911", "Navigation"],
            vec!["3", "Pandora - Music & Radio", "1126879", "Music"],
            vec!["4", "Geocaching®", "12811", "Navigation"],
        ]);
        let members = category_members(&dataset, 3, "Navigation", 1, 2, &Normalizer::Verbatim).unwrap();
        let names: Vec<&str> = members.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Waze - GPS Navigation, Maps & Real-time Traffic",
                "Google Maps - Navigation & Transit",
                "Geocaching®",
            ]
        );
        assert_eq!(members[2].value, 12_811.0);
    }

    #[test]
    fn unknown_category_is_empty() {
        let dataset = Dataset::from_rows(vec![vec!["name", "n", "genre"], vec!["a", "1", "Music"]]);
        let members = category_members(&dataset, 2, "Weather", 0, 1, &Normalizer::Verbatim).unwrap();
        assert!(members.is_empty());
    }
}
