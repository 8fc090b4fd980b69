//! Document assembly.
//!
//! A document is the preamble followed by one rule block per non-blank row
//! below the header, in sheet order. Blocks are never reordered, merged or
//! renumbered.

use std::fmt;

use drl_ingest::{
    HeaderRow, Row, Sheet, is_row_empty, load_first_sheet, normalize_cell, resolve_header_row,
};
use drl_model::{GeneratorOptions, RuleField, RuleRecord, Variant};
use tracing::{debug, debug_span, info, trace};

use crate::error::{ConvertError, Result};
use crate::render::{render_preamble, render_rule};

/// One rendered rule block and the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRule {
    /// 0-based physical row index.
    pub row_index: usize,
    pub text: String,
}

/// A generated rule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrlDocument {
    pub variant: Variant,
    /// Index of the header row the columns were resolved from.
    pub header_row: usize,
    pub preamble: String,
    pub rules: Vec<RenderedRule>,
    /// Physical indices of blank rows below the header that produced no rule.
    pub skipped_rows: Vec<usize>,
}

impl DrlDocument {
    /// Number of rule blocks.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the full document text.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DrlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preamble)?;
        for rule in &self.rules {
            f.write_str(&rule.text)?;
        }
        Ok(())
    }
}

/// Converts the first worksheet of an in-memory workbook into a document.
///
/// # Errors
///
/// [`ConvertError::MalformedInput`] if the bytes are not a readable
/// workbook, [`ConvertError::HeaderNotFound`] if the sheet has no header row
/// for `variant`.
pub fn convert_workbook(
    bytes: &[u8],
    variant: Variant,
    options: &GeneratorOptions,
) -> Result<DrlDocument> {
    let sheet = load_first_sheet(bytes).map_err(|err| ConvertError::MalformedInput {
        reason: err.to_string(),
    })?;
    generate_document(&sheet, variant, options)
}

/// Generates the document for one sheet.
///
/// The header row is resolved before any data row is read; rows strictly
/// below it up to the last row of the sheet are rendered unless blank.
pub fn generate_document(
    sheet: &Sheet,
    variant: Variant,
    options: &GeneratorOptions,
) -> Result<DrlDocument> {
    let span = debug_span!("generate", sheet = sheet.name(), variant = %variant);
    let _guard = span.enter();

    let header =
        resolve_header_row(sheet, variant).ok_or_else(|| ConvertError::HeaderNotFound {
            variant,
            sheet: sheet.name().to_string(),
            expected: variant.required_headers().join(", "),
        })?;

    let mut rules = Vec::new();
    let mut skipped_rows = Vec::new();
    let last_row = sheet.last_row_index().unwrap_or(header.index);
    for row_index in header.index + 1..=last_row {
        let Some(row) = sheet
            .row(row_index)
            .filter(|row| !is_row_empty(Some(*row)))
        else {
            trace!(row = row_index, "skipping blank row");
            skipped_rows.push(row_index);
            continue;
        };
        let record = extract_record(row, &header, variant, row_index);
        rules.push(RenderedRule {
            row_index,
            text: render_rule(&record, variant, options),
        });
    }

    debug!(
        header_row = header.index,
        skipped = skipped_rows.len(),
        "rows processed"
    );
    info!(rules = rules.len(), "generated rule document");

    Ok(DrlDocument {
        variant,
        header_row: header.index,
        preamble: render_preamble(variant, options),
        rules,
        skipped_rows,
    })
}

/// Reads the variant's fields from a data row.
pub fn extract_record(
    row: &Row,
    header: &HeaderRow,
    variant: Variant,
    row_index: usize,
) -> RuleRecord {
    let value = |field: RuleField| {
        normalize_cell(header.column(field).and_then(|column| row.cell(column)))
    };
    RuleRecord {
        row_index,
        circle: value(RuleField::Circle),
        rule_key: value(RuleField::RuleKey),
        workflow_name: value(RuleField::WorkflowName),
        workflow_version: value(RuleField::WorkflowVersion),
        channel: variant
            .reads_channel()
            .then(|| value(RuleField::Channel)),
    }
}
