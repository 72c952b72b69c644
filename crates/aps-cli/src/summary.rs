use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aps_aggregate::RankedEntry;
use aps_cli::render::render_plain;
use aps_cli::types::{CategoryTable, DatasetReport, TableKind};
use aps_cli::views::{DuplicatesView, ExploreView, MembersView};
use aps_model::{DatasetProfile, PriceRule, Record};

use crate::cli::OutputFormatArg;

pub fn print_reports(
    reports: &[DatasetReport],
    format: OutputFormatArg,
    show_drops: bool,
) -> Result<()> {
    match format {
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormatArg::Plain => {
            let rendered: Vec<String> = reports.iter().map(render_plain).collect();
            println!("{}", rendered.join("\n\n"));
        }
        OutputFormatArg::Table => {
            for report in reports {
                print_report_tables(report);
            }
        }
    }
    if show_drops && format != OutputFormatArg::Json {
        for report in reports {
            print_drop_log(report);
        }
    }
    Ok(())
}

fn print_report_tables(report: &DatasetReport) {
    println!();
    println!("Dataset: {} ({})", report.label, report.profile);
    println!("Source: {}", report.path.display());

    let mut stages = Table::new();
    stages.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut stages);
    for column in 1..=3 {
        align_column(&mut stages, column, CellAlignment::Right);
    }
    for stage in &report.stages {
        stages.add_row(vec![
            Cell::new(stage.stage),
            Cell::new(stage.rows_in),
            Cell::new(stage.rows_out),
            dropped_cell(stage.dropped()),
        ]);
    }
    stages.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows_loaded),
        Cell::new(report.rows_clean).add_attribute(Attribute::Bold),
        dropped_cell(report.rows_loaded.saturating_sub(report.rows_clean)),
    ]);
    println!("{stages}");

    for table in report.frequency.iter().chain(report.engagement.as_ref()) {
        print_category_table(table);
    }
}

fn print_category_table(category: &CategoryTable) {
    println!();
    println!("{}", category.title());
    let value_header = match category.kind {
        TableKind::Share => "% of apps".to_string(),
        TableKind::Mean => category
            .metric
            .clone()
            .unwrap_or_else(|| "Mean".to_string()),
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(&category.column),
        header_cell(&value_header),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, entry) in category.entries.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&entry.label),
            Cell::new(format!("{:.2}", entry.value)),
        ]);
    }
    if category.entries.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("no rows"), dim_cell("-")]);
    }
    println!("{table}");
}

fn print_drop_log(report: &DatasetReport) {
    if report.dropped.is_empty() {
        return;
    }
    println!();
    println!("Dropped rows: {} ({})", report.label, report.dropped.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for dropped in report.dropped.iter() {
        table.add_row(vec![
            Cell::new(dropped.row),
            match &dropped.key {
                Some(key) => Cell::new(key),
                None => dim_cell("-"),
            },
            Cell::new(dropped.reason.kind()).fg(Color::Yellow),
            Cell::new(&dropped.reason),
        ]);
    }
    println!("{table}");
}

pub fn print_explore(view: &ExploreView) {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(view.header.fields().iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (offset, record) in view.rows.iter().enumerate() {
        table.add_row(record_row(view.start + offset, record));
    }
    println!("{table}");
    if let Some((rows, columns)) = view.shape {
        println!("Number of rows: {rows}");
        println!("Number of columns: {columns}");
    }
}

pub fn print_duplicates(view: &DuplicatesView) {
    println!("Unique {}: {}", view.column, view.summary.unique);
    println!("Duplicate {}: {}", view.column, view.summary.duplicate);
    if !view.top.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell(&view.column), header_cell("Copies")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (name, count) in &view.top {
            table.add_row(vec![Cell::new(name), Cell::new(count)]);
        }
        println!("{table}");
    }
    if let Some((header, rows)) = &view.matches {
        let mut table = Table::new();
        let mut cells = vec![header_cell("#")];
        cells.extend(header.fields().iter().map(|name| header_cell(name)));
        table.set_header(cells);
        apply_table_style(&mut table);
        for (idx, record) in rows.iter().enumerate() {
            table.add_row(record_row(idx, record));
        }
        if rows.is_empty() {
            println!("No rows match.");
        } else {
            println!("{table}");
        }
    }
}

pub fn print_members(view: &MembersView) {
    println!("Category: {}", view.category);
    let mut table = Table::new();
    table.set_header(vec![header_cell("App"), header_cell(&view.metric)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for RankedEntry { label, value } in &view.members {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    if let Some(mean) = view.mean() {
        table.add_row(vec![
            Cell::new(format!("MEAN of {} apps", view.members.len()))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{mean:.2}")).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

pub fn print_profiles(profiles: &[DatasetProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile"),
        header_cell("Description"),
        header_cell("Name"),
        header_cell("Reviews"),
        header_cell("Free when"),
        header_cell("Frequency"),
        header_cell("Engagement"),
    ]);
    apply_table_style(&mut table);
    for profile in profiles {
        let free_when = match &profile.price_rule {
            PriceRule::Label { free } => format!("col {} = '{free}'", profile.price_column),
            PriceRule::Numeric { free } => format!("col {} = {free}", profile.price_column),
        };
        let frequency: Vec<String> = profile
            .frequency_columns
            .iter()
            .map(ToString::to_string)
            .collect();
        let engagement = match &profile.engagement {
            Some(spec) => Cell::new(format!(
                "mean {} by {}",
                spec.metric_column, spec.category_column
            )),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&profile.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(&profile.description),
            Cell::new(&profile.name_column),
            Cell::new(&profile.review_column),
            Cell::new(free_when),
            Cell::new(frequency.join(", ")),
            engagement,
        ]);
    }
    println!("{table}");
}

fn record_row(index: usize, record: &Record) -> Vec<Cell> {
    let mut cells = vec![dim_cell(index)];
    cells.extend(record.fields().iter().map(Cell::new));
    cells
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dropped_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
