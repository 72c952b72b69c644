//! Plain-text report rendering: one `label : value` line per category.

use aps_aggregate::RankedEntry;

use crate::types::{CategoryTable, DatasetReport, TableKind};

/// Render every section of `report` as plain text, without a trailing
/// newline.
pub fn render_plain(report: &DatasetReport) -> String {
    let mut lines = vec![
        format!("== {} ({}) ==", report.label, report.profile),
        format!(
            "rows: {} loaded, {} after cleaning",
            report.rows_loaded, report.rows_clean
        ),
    ];
    lines.extend(report.stages.iter().map(|stage| {
        format!(
            "  {}: {} -> {} (-{})",
            stage.stage,
            stage.rows_in,
            stage.rows_out,
            stage.dropped()
        )
    }));
    for table in report.frequency.iter().chain(report.engagement.as_ref()) {
        lines.push(String::new());
        lines.extend(table_lines(table));
    }
    lines.join("\n")
}

fn table_lines(table: &CategoryTable) -> impl Iterator<Item = String> + '_ {
    std::iter::once(format!("-- {} --", table.title())).chain(
        table
            .entries
            .iter()
            .map(|entry| plain_line(entry, table.kind)),
    )
}

/// `label : value`, rounded to two decimals.
pub fn plain_line(entry: &RankedEntry, kind: TableKind) -> String {
    match kind {
        TableKind::Share => format!("{} : {:.2}%", entry.label, entry.value),
        TableKind::Mean => format!("{} : {:.2}", entry.label, entry.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_lines_carry_a_percent_sign() {
        let entry = RankedEntry::new("Games", 58.162_361_8);
        assert_eq!(plain_line(&entry, TableKind::Share), "Games : 58.16%");
        assert_eq!(plain_line(&entry, TableKind::Mean), "Games : 58.16");
    }

    #[test]
    fn empty_report_has_no_trailing_newline() {
        let report = DatasetReport {
            label: "empty".to_string(),
            profile: "apple".to_string(),
            path: Default::default(),
            rows_loaded: 0,
            rows_clean: 0,
            stages: Vec::new(),
            drop_counts: Default::default(),
            dropped: Default::default(),
            frequency: Vec::new(),
            engagement: None,
        };
        assert_eq!(
            render_plain(&report),
            "== empty (apple) ==\nrows: 0 loaded, 0 after cleaning"
        );
    }
}
