//! Console summary for a completed run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input:  {}", result.input.display());
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Record"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let summary = &result.summary;
    table.add_row(vec![Cell::new("Input rows"), Cell::new(summary.rows_read)]);
    if summary.rows_without_group > 0 {
        table.add_row(vec![
            Cell::new("Rows without group key (skipped)"),
            Cell::new(summary.rows_without_group),
        ]);
    }
    table.add_row(vec![Cell::new("Groups"), Cell::new(summary.groups)]);
    table.add_row(vec![Cell::new("Options"), Cell::new(summary.options)]);
    table.add_row(vec![Cell::new("Values"), Cell::new(summary.values)]);
    table.add_row(vec![Cell::new("Products"), Cell::new(summary.products)]);
    table.add_row(vec![
        Cell::new("Output rows").add_attribute(Attribute::Bold),
        Cell::new(result.rows_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
