//! Explore, duplicates and members views over an on-disk Google Play sample.

use std::fs;
use std::path::{Path, PathBuf};

use aps_cli::views::{LoadedDataset, duplicates, explore, members};
use tempfile::TempDir;

const HEADER: &str = "App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating,Genres,Last Updated,Current Ver,Android Ver";

fn play_row(name: &str, category: &str, reviews: &str, installs: &str, kind: &str) -> String {
    let price = if kind == "Free" { "0" } else { "$6.99" };
    format!(
        "{name},{category},4.5,{reviews},Varies with device,\"{installs}\",{kind},{price},Everyone,Genre,August 1 2018,1.0,4.1 and up"
    )
}

fn sample_csv() -> String {
    let rows = [
        play_row("Instagram", "SOCIAL", "66577313", "1,000,000,000+", "Free"),
        play_row("Duolingo", "EDUCATION", "6290507", "100,000,000+", "Free"),
        play_row("Instagram", "SOCIAL", "66577446", "1,000,000,000+", "Free"),
        play_row("Khan Academy", "EDUCATION", "85375", "5,000,000+", "Free"),
        play_row("Duolingo", "EDUCATION", "6289924", "100,000,000+", "Free"),
        play_row("Minecraft", "FAMILY", "2376564", "10,000,000+", "Paid"),
        play_row("Instagram", "SOCIAL", "66509917", "1,000,000,000+", "Free"),
        play_row("Netflix", "ENTERTAINMENT", "5456208", "100,000,000+", "Free"),
        play_row("Netflix", "ENTERTAINMENT", "5456208", "100,000,000+", "Free"),
    ];
    format!("{HEADER}\n{}\n", rows.join("\n"))
}

fn sample_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("googleplaystore.csv");
    fs::write(&path, sample_csv()).expect("write csv");
    (dir, path)
}

fn open_google(path: &Path) -> LoadedDataset {
    LoadedDataset::open(path, "google", None).expect("load sample")
}

#[test]
fn explore_clamps_the_slice_and_reports_shape() {
    let (_dir, path) = sample_file();
    let loaded = open_google(&path);

    let view = explore(&loaded, 7, 20, true);
    assert_eq!(view.start, 7);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].get(0), Some("Netflix"));
    assert_eq!(view.header.get(5), Some("Installs"));
    assert_eq!(view.shape, Some((9, 13)));

    let past_end = explore(&loaded, 12, 15, false);
    assert!(past_end.rows.is_empty());
    assert_eq!(past_end.shape, None);
}

#[test]
fn duplicates_rank_by_copies_then_name() {
    let (_dir, path) = sample_file();
    let loaded = open_google(&path);

    let view = duplicates(&loaded, None, 2).expect("count duplicates");
    assert_eq!(view.column, "App");
    assert_eq!(view.summary.unique, 5);
    assert_eq!(view.summary.duplicate, 4);
    assert_eq!(
        view.top,
        vec![("Instagram".to_string(), 3), ("Duolingo".to_string(), 2)]
    );
    assert!(view.matches.is_none());

    let all = duplicates(&loaded, None, 10).expect("count duplicates");
    assert_eq!(all.top.len(), 3);
    assert_eq!(all.top[2], ("Netflix".to_string(), 2));
}

#[test]
fn duplicates_list_every_row_for_a_name() {
    let (_dir, path) = sample_file();
    let loaded = open_google(&path);

    let view = duplicates(&loaded, Some("Instagram"), 10).expect("count duplicates");
    let (header, rows) = view.matches.expect("matches requested");
    assert_eq!(header.len(), 13);
    let reviews: Vec<&str> = rows.iter().filter_map(|row| row.get(3)).collect();
    assert_eq!(reviews, vec!["66577313", "66577446", "66509917"]);

    let none = duplicates(&loaded, Some("Snapchat"), 10).expect("count duplicates");
    assert_eq!(none.matches.map(|(_, rows)| rows.len()), Some(0));
}

#[test]
fn members_run_on_cleaned_rows() {
    let (_dir, path) = sample_file();
    let loaded = open_google(&path);

    let view = members(&loaded, "EDUCATION").expect("members");
    assert_eq!(view.metric, "Installs");
    let listed: Vec<(&str, f64)> = view
        .members
        .iter()
        .map(|entry| (entry.label.as_str(), entry.value))
        .collect();
    assert_eq!(
        listed,
        vec![("Duolingo", 100_000_000.0), ("Khan Academy", 5_000_000.0)]
    );
    assert_eq!(view.mean(), Some(52_500_000.0));

    // Minecraft is paid, so the free-only stage removes the whole category.
    let family = members(&loaded, "FAMILY").expect("members");
    assert!(family.members.is_empty());
    assert_eq!(family.mean(), None);
}

#[test]
fn members_need_engagement_columns() {
    let (dir, path) = sample_file();
    let profile_path = dir.path().join("no_engagement.toml");
    fs::write(
        &profile_path,
        r#"
name_column = 0
review_column = 3
price_column = 6
price_rule = { kind = "label", free = "Free" }
"#,
    )
    .expect("write profile");

    let loaded = LoadedDataset::open(&path, "apple", Some(profile_path.as_path())).expect("load sample");
    assert_eq!(loaded.profile.name, "no_engagement");
    let message = format!("{:#}", members(&loaded, "EDUCATION").unwrap_err());
    assert_eq!(message, "profile 'no_engagement' has no engagement columns");
}
