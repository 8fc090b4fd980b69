//! Error types for rule spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading spreadsheets or discovering input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Workbook Errors ===
    /// The bytes are not a workbook the reader understands.
    #[error("unreadable workbook: {message}")]
    Workbook { message: String },

    /// The workbook contains no worksheet.
    #[error("workbook has no worksheet")]
    NoWorksheet,

    /// The first worksheet could not be read.
    #[error("failed to read worksheet '{sheet}': {message}")]
    Worksheet { sheet: String, message: String },

    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to walk directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
