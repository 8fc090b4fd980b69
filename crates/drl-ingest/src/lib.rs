//! Rule spreadsheet ingestion.
//!
//! This crate turns spreadsheet bytes into an in-memory [`Sheet`] and
//! provides the building blocks the generator uses to read it.
//!
//! # Features
//!
//! - **Workbook Loading**: Read the first worksheet with calamine, keeping absolute cell positions
//! - **Cell Normalization**: Render any cell as the text written to rules
//! - **Header Detection**: Find the header row of a variant anywhere in the sheet
//! - **Row Classification**: Recognize blank rows that produce no rule
//! - **File Discovery**: Recursively find input workbooks
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drl_ingest::{list_spreadsheet_files, load_first_sheet, read_file, resolve_header_row};
//! use drl_model::Variant;
//!
//! for path in list_spreadsheet_files(Path::new("rules"), "xls")? {
//!     let sheet = load_first_sheet(&read_file(&path)?)?;
//!     let header = resolve_header_row(&sheet, Variant::OrderWorkflow);
//! }
//! ```

mod cell;
mod discovery;
mod error;
mod header;
mod row;
mod sheet;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Model ===
pub use sheet::{Cell, Row, Sheet};

// === Workbook Loading ===
pub use workbook::{load_first_sheet, sheet_from_range};

// === Cell Normalization ===
pub use cell::{format_numeric, normalize_cell};

// === Header Detection ===
pub use header::{
    HeaderRow, contains_headers, find_column_index, labels_match, locate_header_row,
    resolve_header_row,
};

// === Row Classification ===
pub use row::is_row_empty;

// === File Discovery ===
pub use discovery::{DEFAULT_EXTENSION, has_extension, list_spreadsheet_files, read_file};
