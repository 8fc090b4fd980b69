//! Error types for rule generation.

use drl_model::Variant;
use thiserror::Error;

/// Errors that abort the conversion of one spreadsheet.
///
/// Either error means no document was produced; there is no partial output.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The bytes are not a readable spreadsheet.
    #[error("malformed spreadsheet: {reason}")]
    MalformedInput { reason: String },

    /// No row holds every header label the variant requires.
    #[error("header row not found in sheet '{sheet}': expected {expected} for {variant} workflow rules")]
    HeaderNotFound {
        variant: Variant,
        sheet: String,
        expected: String,
    },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
