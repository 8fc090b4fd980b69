//! In-memory sheet model.
//!
//! Rows and cells are sparse and addressed by their absolute position in the
//! worksheet, so a row index here is the same index a spreadsheet user sees
//! (minus one).

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text cell.
    Text(String),
    /// Numeric cell. Integer and date cells are stored here as well.
    Numeric(f64),
    /// Boolean cell.
    Boolean(bool),
    /// Formula cell, holding the formula text.
    Formula(String),
    /// Error cell, holding the error code (e.g. `#DIV/0!`).
    Error(String),
    /// Typed but empty cell.
    Blank,
}

impl Cell {
    /// Convenience constructor for a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Returns true for the blank cell kind.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// One worksheet row: cells by column index, `None` where no cell exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Option<Cell>>,
}

impl Row {
    pub fn new(cells: Vec<Option<Cell>>) -> Self {
        Self { cells }
    }

    /// Builds a row where every position holds a text cell.
    pub fn from_texts<S: AsRef<str>>(values: &[S]) -> Self {
        Self::new(
            values
                .iter()
                .map(|value| Some(Cell::text(value.as_ref())))
                .collect(),
        )
    }

    /// Returns the cell at `column`, or `None` if it is absent.
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column).and_then(Option::as_ref)
    }

    /// Iterates over all cell slots, left to right.
    pub fn cells(&self) -> impl Iterator<Item = Option<&Cell>> {
        self.cells.iter().map(Option::as_ref)
    }
}

/// A worksheet: rows by index, `None` where no row exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Option<Row>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Option<Row>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the row at `index`, or `None` if it is absent.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index).and_then(Option::as_ref)
    }

    /// Index of the last row slot, or `None` for a sheet without rows.
    pub fn last_row_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    /// Iterates over `(index, row)` for every present row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(index, row)| row.as_ref().map(|row| (index, row)))
    }

    /// Number of row slots.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
