use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chartab_model::{FrequencyTable, Scalar, ValueCounts};

/// Renders a human-readable per-column overview of a frequency table.
pub fn print_summary(table: &FrequencyTable, total_records: usize) {
    println!("Records: {total_records}");
    println!("Columns: {}", table.columns.len());
    if table.columns.is_empty() {
        return;
    }
    let mut overview = Table::new();
    overview.set_header(vec![
        header_cell("Column"),
        header_cell("Distinct"),
        header_cell("Missing"),
        header_cell("Top value"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut overview);
    align_column(&mut overview, 1, CellAlignment::Right);
    align_column(&mut overview, 2, CellAlignment::Right);
    align_column(&mut overview, 4, CellAlignment::Right);
    for column in &table.columns {
        let Some(histogram) = table.column(column) else {
            continue;
        };
        let missing = histogram.get(&Scalar::Missing).copied().unwrap_or(0);
        let (top_value, top_count) = top_bucket(histogram);
        overview.add_row(vec![
            Cell::new(column).add_attribute(Attribute::Bold),
            Cell::new(histogram.len()),
            missing_cell(missing),
            Cell::new(top_value),
            Cell::new(top_count),
        ]);
    }
    println!("{overview}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn top_bucket(histogram: &ValueCounts) -> (String, u64) {
    histogram
        .iter()
        .max_by_key(|&(_, &count)| count)
        .map(|(value, &count)| (value.to_string(), count))
        .unwrap_or_default()
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn missing_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
