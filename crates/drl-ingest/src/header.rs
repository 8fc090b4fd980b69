//! Header row detection and column mapping.
//!
//! Rule sheets often carry a title block above the table, so the header row
//! is searched for instead of assumed to be the first row. A row is the
//! header when every required label of the variant appears in it; label
//! order within the row does not matter.

use drl_model::{RuleField, Variant};
use tracing::debug;

use crate::cell::normalize_cell;
use crate::sheet::{Row, Sheet};

/// The located header row and the column of each required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Physical index of the header row.
    pub index: usize,
    columns: Vec<(RuleField, usize)>,
}

impl HeaderRow {
    /// Returns the column holding `field`, if the field was resolved.
    pub fn column(&self, field: RuleField) -> Option<usize> {
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, column)| *column)
    }
}

/// Case-insensitive exact comparison of a header label and a cell value.
pub fn labels_match(label: &str, value: &str) -> bool {
    label.to_lowercase() == value.to_lowercase()
}

/// Returns the index of the first cell whose normalized value matches `label`.
pub fn find_column_index(row: &Row, label: &str) -> Option<usize> {
    row.cells()
        .position(|cell| labels_match(label, &normalize_cell(cell)))
}

/// Returns true if every label matches some cell of the row.
pub fn contains_headers(row: &Row, labels: &[&str]) -> bool {
    let values: Vec<String> = row.cells().map(normalize_cell).collect();
    labels
        .iter()
        .all(|label| values.iter().any(|value| labels_match(label, value)))
}

/// Returns the index of the first row containing all `labels`.
pub fn locate_header_row(sheet: &Sheet, labels: &[&str]) -> Option<usize> {
    sheet
        .rows()
        .find(|(_, row)| contains_headers(row, labels))
        .map(|(index, _)| index)
}

/// Locates the header row for `variant` and maps each required field to
/// its column.
///
/// Returns `None` when no row holds every required label.
pub fn resolve_header_row(sheet: &Sheet, variant: Variant) -> Option<HeaderRow> {
    let labels = variant.required_headers();
    let index = locate_header_row(sheet, &labels)?;
    let row = sheet.row(index)?;

    let mut columns = Vec::with_capacity(labels.len());
    for field in variant.required_fields() {
        let column = find_column_index(row, field.label())?;
        columns.push((*field, column));
    }
    debug!(
        sheet = sheet.name(),
        header_row = index,
        columns = ?columns,
        "resolved header row"
    );
    Some(HeaderRow { index, columns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Cell;

    #[test]
    fn test_labels_match_ignores_case_only() {
        assert!(labels_match("Rule Key", "rule key"));
        assert!(labels_match("Rule Key", "RULE KEY"));
        assert!(!labels_match("Rule Key", " Rule Key"));
        assert!(!labels_match("Rule Key", "RuleKey"));
    }

    #[test]
    fn test_find_column_index_first_match_wins() {
        let row = Row::from_texts(&["Channel", "circle", "Circle"]);
        assert_eq!(find_column_index(&row, "Circle"), Some(1));
        assert_eq!(find_column_index(&row, "Rule Key"), None);
    }

    #[test]
    fn test_find_column_index_skips_absent_cells() {
        let row = Row::new(vec![None, Some(Cell::Blank), Some(Cell::text("Circle"))]);
        assert_eq!(find_column_index(&row, "Circle"), Some(2));
    }

    #[test]
    fn test_contains_headers_is_unordered() {
        let row = Row::from_texts(&["Workflow Version", "Circle", "Workflow Name", "Rule Key"]);
        assert!(contains_headers(
            &row,
            &Variant::DraftWorkflow.required_headers()
        ));
        assert!(!contains_headers(
            &row,
            &Variant::OrderWorkflow.required_headers()
        ));
    }
}
