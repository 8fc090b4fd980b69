use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::{BatchResult, FileStatus};

/// Prints the batch summary to stderr so stdout only carries documents.
pub fn print_summary(result: &BatchResult) {
    eprintln!("Input: {}", result.input_dir.display());
    if let Some(dir) = &result.output_dir {
        eprintln!("Output: {}", dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Variant"),
        header_cell("Rules"),
        header_cell("Skipped"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_rules = 0usize;
    let mut total_skipped = 0usize;
    for file in &result.files {
        let name = display_name(&result.input_dir, &file.path);
        match &file.status {
            FileStatus::Converted {
                rules,
                skipped_rows,
                output,
            } => {
                total_rules += rules;
                total_skipped += skipped_rows;
                let status = match output {
                    Some(path) => format!("ok -> {}", path.display()),
                    None => "ok".to_string(),
                };
                table.add_row(vec![
                    Cell::new(name).fg(Color::Blue),
                    Cell::new(file.variant),
                    Cell::new(rules),
                    Cell::new(skipped_rows),
                    Cell::new(status).fg(Color::Green),
                ]);
            }
            FileStatus::Failed { error } => {
                table.add_row(vec![
                    Cell::new(name).fg(Color::Blue),
                    Cell::new(file.variant),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(error).fg(Color::Red),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rules).add_attribute(Attribute::Bold),
        Cell::new(total_skipped).add_attribute(Attribute::Bold),
        status_total_cell(result),
    ]);
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn display_name(input_dir: &Path, path: &Path) -> String {
    path.strip_prefix(input_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn status_total_cell(result: &BatchResult) -> Cell {
    let text = format!(
        "{} converted, {} failed",
        result.converted_count(),
        result.failed_count()
    );
    if result.has_errors {
        Cell::new(text).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(text).fg(Color::Green).add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
