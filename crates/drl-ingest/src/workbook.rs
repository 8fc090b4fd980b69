//! Workbook loading with calamine.
//!
//! This is the only module that knows about the spreadsheet library. It
//! turns the first worksheet of a workbook into a [`Sheet`] whose row and
//! column indices are absolute positions in the worksheet.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::sheet::{Cell, Row, Sheet};

/// Loads the first worksheet of an in-memory workbook.
///
/// The format is detected from the content; legacy `.xls` files are the
/// usual input but any format calamine recognizes is accepted. Cells that
/// hold a formula become [`Cell::Formula`] regardless of their cached value.
pub fn load_first_sheet(bytes: &[u8]) -> Result<Sheet> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|err| IngestError::Workbook {
            message: err.to_string(),
        })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::NoWorksheet)?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|err| IngestError::Worksheet {
            sheet: name.clone(),
            message: err.to_string(),
        })?;

    let formulas = match workbook.worksheet_formula(&name) {
        Ok(formulas) => Some(formulas),
        Err(err) => {
            warn!(sheet = %name, error = %err, "formula information unavailable, using cached values");
            None
        }
    };

    let sheet = sheet_from_range(name, &range, formulas.as_ref());
    debug!(sheet = sheet.name(), rows = sheet.len(), "loaded worksheet");
    Ok(sheet)
}

/// Builds a [`Sheet`] from a calamine range.
///
/// Rows above and columns left of the used range are absent, so indices
/// keep their worksheet positions. `formulas`, when given, marks the cells
/// holding a formula.
pub fn sheet_from_range(
    name: impl Into<String>,
    range: &Range<Data>,
    formulas: Option<&Range<String>>,
) -> Sheet {
    let Some((start_row, start_col)) = range.start() else {
        return Sheet::new(name, Vec::new());
    };

    let mut rows: Vec<Option<Row>> = vec![None; start_row as usize];
    for (row_offset, values) in range.rows().enumerate() {
        let row = start_row as usize + row_offset;
        let mut cells: Vec<Option<Cell>> = vec![None; start_col as usize];
        for (col_offset, value) in values.iter().enumerate() {
            let column = start_col as usize + col_offset;
            let formula = formulas
                .and_then(|formulas| formulas.get_value((row as u32, column as u32)))
                .filter(|formula| !formula.is_empty());
            cells.push(match formula {
                Some(formula) => Some(Cell::Formula(formula.clone())),
                None => convert_value(value),
            });
        }
        rows.push(Some(Row::new(cells)));
    }
    Sheet::new(name, rows)
}

/// Maps a calamine value to a typed cell; empty values are absent cells.
fn convert_value(value: &Data) -> Option<Cell> {
    match value {
        Data::Empty => None,
        Data::String(text) => Some(Cell::Text(text.clone())),
        Data::Float(number) => Some(Cell::Numeric(*number)),
        Data::Int(number) => Some(Cell::Numeric(*number as f64)),
        Data::Bool(flag) => Some(Cell::Boolean(*flag)),
        Data::DateTime(datetime) => Some(Cell::Numeric(datetime.as_f64())),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Some(Cell::Text(text.clone())),
        Data::Error(error) => Some(Cell::Error(error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        let sheet = sheet_from_range("Sheet1", &range, None);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_offset_range_keeps_absolute_positions() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Circle".to_string()));
        range.set_value((3, 2), Data::Float(1.0));

        let sheet = sheet_from_range("Sheet1", &range, None);
        assert_eq!(sheet.last_row_index(), Some(3));
        assert!(sheet.row(0).is_none());
        assert!(sheet.row(1).is_none());

        let header = sheet.row(2).expect("row 2");
        assert!(header.cell(0).is_none());
        assert_eq!(header.cell(1), Some(&Cell::text("Circle")));
        assert!(header.cell(2).is_none());

        let data = sheet.row(3).expect("row 3");
        assert_eq!(data.cell(2), Some(&Cell::Numeric(1.0)));
    }

    #[test]
    fn test_formula_cells_override_cached_values() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::Float(3.0));
        range.set_value((0, 1), Data::Float(4.0));
        let mut formulas: Range<String> = Range::new((0, 0), (0, 1));
        formulas.set_value((0, 1), "A1+1".to_string());

        let sheet = sheet_from_range("Sheet1", &range, Some(&formulas));
        let row = sheet.row(0).expect("row 0");
        assert_eq!(row.cell(0), Some(&Cell::Numeric(3.0)));
        assert_eq!(row.cell(1), Some(&Cell::Formula("A1+1".to_string())));
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(convert_value(&Data::Empty), None);
        assert_eq!(convert_value(&Data::Int(7)), Some(Cell::Numeric(7.0)));
        assert_eq!(convert_value(&Data::Bool(true)), Some(Cell::Boolean(true)));
        assert_eq!(
            convert_value(&Data::Error(calamine::CellErrorType::Div0)),
            Some(Cell::Error("#DIV/0!".to_string()))
        );
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let err = load_first_sheet(b"definitely not a spreadsheet").unwrap_err();
        assert!(matches!(err, IngestError::Workbook { .. }));
    }
}
