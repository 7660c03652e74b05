//! Run summary printed after a successful generate.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use pluxee_cli::pipeline::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    println!("Workbook: {}", result.output_path.display());
    println!("Credit date: {}", result.credit_date);
    match &result.birth_column {
        Some(column) => println!("Birth-date column: {column}"),
        None => println!("Birth-date column: none (default applied to all rows)"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Persons", "Emitted", "Skipped", "Rows"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.persons),
        Cell::new(result.emitted),
        Cell::new(result.skipped),
        Cell::new(result.rows),
    ]);
    for index in 0..4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
