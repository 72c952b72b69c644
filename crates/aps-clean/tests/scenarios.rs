//! End-to-end cleaning scenarios.

use aps_clean::{
    DropReason, clean_dataset, dedupe_by_max_metric, filter_charset, filter_price, filter_schema,
};
use aps_model::{Dataset, DatasetProfile, PriceRule, Record};

#[test]
fn dedupe_then_price_filter() {
    let dataset = Dataset::new(
        Record::from(["name", "reviews", "type"]),
        vec![
            Record::from(["A", "10", "Free"]),
            Record::from(["A", "20", "Free"]),
            Record::from(["B", "5", "Paid"]),
        ],
    );

    let deduped = dedupe_by_max_metric(&dataset, 0, 1).unwrap();
    assert_eq!(
        deduped.dataset.records(),
        &[Record::from(["A", "20", "Free"]), Record::from(["B", "5", "Paid"])]
    );

    let free = filter_price(&deduped.dataset, 2, &PriceRule::label("Free")).unwrap();
    assert_eq!(free.dataset.records(), &[Record::from(["A", "20", "Free"])]);
}

#[test]
fn charset_threshold_boundary() {
    let dataset = Dataset::new(
        Record::from(["name"]),
        vec![Record::from(["ééé"]), Record::from(["éééé"])],
    );
    let cleaned = filter_charset(&dataset, 0, 3).unwrap();
    assert_eq!(cleaned.dataset.records(), &[Record::from(["ééé"])]);
    let entry = cleaned.dropped.iter().next().unwrap();
    assert_eq!(entry.reason, DropReason::NonEnglishName { non_ascii: 4 });
}

#[test]
fn empty_after_schema_filter_flows_through() {
    let dataset = Dataset::from_rows(vec![
        vec!["App", "Category", "Rating", "Reviews", "Size", "Installs", "Type"],
        vec!["broken"],
    ]);
    let schema = filter_schema(&dataset);
    assert!(schema.dataset.is_empty());

    let outcome = clean_dataset(&dataset, &DatasetProfile::google_play()).unwrap();
    assert!(outcome.dataset.is_empty());
    assert!(outcome.stages.iter().skip(1).all(|stage| stage.rows_in == 0));

    let deduped = dedupe_by_max_metric(&schema.dataset, 0, 3).unwrap();
    let english = filter_charset(&deduped.dataset, 0, 3).unwrap();
    let free = filter_price(&english.dataset, 6, &PriceRule::label("Free")).unwrap();
    assert!(free.dataset.is_empty());
}

fn apple_rows() -> Dataset {
    let header = [
        "id",
        "track_name",
        "size_bytes",
        "currency",
        "price",
        "rating_count_tot",
        "rating_count_ver",
        "user_rating",
        "user_rating_ver",
        "ver",
        "cont_rating",
        "prime_genre",
        "sup_devices.num",
        "ipadSc_urls.num",
        "lang.num",
        "vpp_lic",
    ];
    let app = |id: &str, name: &str, price: &str, ratings: &str, genre: &str| {
        Record::from([
            id, name, "100788224", "USD", price, ratings, "26", "3.5", "3.5", "95.0", "4+",
            genre, "37", "1", "29", "1",
        ])
    };
    Dataset::new(
        Record::from(header),
        vec![
            app("284882215", "Facebook", "0.0", "2974676", "Social Networking"),
            app("389801252", "Instagram", "0.0", "2161558", "Photo & Video"),
            app("952877179", "VR Roller Coaster", "0.0", "107", "Games"),
            app("1173990889", "Mannequin Challenge", "0.0", "668", "Games"),
            app("1178454060", "Mannequin Challenge", "0.0", "105", "Games"),
            app("529479190", "Clash of Clans", "0.0", "2130805", "Games"),
            app("479516143", "Minecraft: Pocket Edition", "6.99", "522012", "Games"),
            app("1097148221", "聚力视频HD-人民的名义,跨界歌王全网热播", "0.0", "308", "Entertainment"),
        ],
    )
}

#[test]
fn apple_profile_cleans_sample() {
    let outcome = clean_dataset(&apple_rows(), &DatasetProfile::apple_store()).unwrap();
    let names: Vec<&str> = outcome
        .dataset
        .iter()
        .filter_map(|record| record.get(1))
        .collect();
    assert_eq!(
        names,
        vec![
            "Facebook",
            "Instagram",
            "VR Roller Coaster",
            "Mannequin Challenge",
            "Clash of Clans",
        ]
    );
    let kinds = outcome.dropped.counts_by_kind();
    assert_eq!(kinds.get("duplicate"), Some(&1));
    assert_eq!(kinds.get("non_english_name"), Some(&1));
    assert_eq!(kinds.get("not_free"), Some(&1));
    assert_eq!(kinds.get("schema_mismatch"), None);
}
