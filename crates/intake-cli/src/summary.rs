use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{Destination, UploadOutcome};

pub fn print_upload_summary(outcome: &UploadOutcome) {
    let summary = &outcome.summary;
    println!("File: {}", summary.file.display());
    println!("SHA-256: {}", summary.sha256);
    println!("Header row: {}", summary.header_row + 1);
    match &outcome.destination {
        Destination::DryRun { records } => {
            println!("Dry run: {records} records validated, nothing stored");
        }
        Destination::Jsonl(dir) => println!("Output: {}", dir.display()),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Report"),
        header_cell("Rows"),
        header_cell("Inserted"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&summary.source)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&summary.report),
        Cell::new(summary.total),
        Cell::new(summary.inserted).fg(Color::Green),
        failed_cell(summary.failed),
    ]);
    println!("{table}");

    if summary.has_failures() {
        eprintln!(
            "{} rows failed; see {}",
            summary.failed,
            summary.failure_log.display()
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn failed_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}
