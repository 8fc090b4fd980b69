//! Blank row detection.

use crate::sheet::{Cell, Row};

/// Returns true if the row is absent or holds only absent or blank cells.
///
/// Emptiness is decided on cell kind, not on normalized text: a numeric `0`,
/// an empty text cell or a formula keeps the row.
pub fn is_row_empty(row: Option<&Row>) -> bool {
    row.is_none_or(|row| row.cells().all(|cell| cell.is_none_or(Cell::is_blank)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_row_is_empty() {
        assert!(is_row_empty(None));
    }

    #[test]
    fn test_row_without_cells_is_empty() {
        assert!(is_row_empty(Some(&Row::default())));
    }

    #[test]
    fn test_blank_and_absent_cells_are_empty() {
        let row = Row::new(vec![None, Some(Cell::Blank), None]);
        assert!(is_row_empty(Some(&row)));
    }

    #[test]
    fn test_typed_cells_keep_row() {
        for cell in [
            Cell::Numeric(0.0),
            Cell::text(""),
            Cell::Boolean(false),
            Cell::Formula("SUM(A1:A2)".to_string()),
            Cell::Error("#N/A".to_string()),
        ] {
            let row = Row::new(vec![Some(Cell::Blank), Some(cell)]);
            assert!(!is_row_empty(Some(&row)));
        }
    }
}
