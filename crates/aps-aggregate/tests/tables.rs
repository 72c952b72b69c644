//! Frequency and engagement table properties.

use aps_aggregate::{Normalizer, build_engagement_table, build_frequency_table};
use aps_model::{Dataset, Record};
use proptest::prelude::*;

fn labelled(labels: Vec<String>) -> Dataset {
    Dataset::new(
        Record::from(["App", "Genre"]),
        labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| Record::from(vec![format!("app-{idx}"), label]))
            .collect(),
    )
}

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred(labels in prop::collection::vec("[A-F]{1,2}", 1..200)) {
        let table = build_frequency_table(&labelled(labels), 1).unwrap();
        let sum: f64 = table.percentages().values().sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
    }

    #[test]
    fn ranked_frequencies_are_non_increasing(labels in prop::collection::vec("[A-F]", 1..100)) {
        let ranked = build_frequency_table(&labelled(labels), 1).unwrap().ranked();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }
}

#[test]
fn frequency_percentages_for_three_rows() {
    let table = build_frequency_table(
        &labelled(vec!["X".to_string(), "X".to_string(), "Y".to_string()]),
        1,
    )
    .unwrap();
    let percentages = table.percentages();
    assert_eq!(percentages.len(), 2);
    assert!((percentages["X"] - 200.0 / 3.0).abs() < 1e-9);
    assert!((percentages["Y"] - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn engagement_ranked_serializes() {
    let dataset = Dataset::from_rows(vec![
        vec!["track_name", "rating_count_tot", "prime_genre"],
        vec!["Waze", "345046", "Navigation"],
        vec!["Google Maps", "154911", "Navigation"],
        vec!["Bible", "985920", "Reference"],
    ]);
    let table = build_engagement_table(&dataset, 2, 1, &Normalizer::Verbatim).unwrap();
    let json = serde_json::to_value(table.ranked()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "label": "Reference", "value": 985920.0 },
            { "label": "Navigation", "value": 249978.5 },
        ])
    );
}
