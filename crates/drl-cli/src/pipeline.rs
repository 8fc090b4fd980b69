//! Per-file conversion steps of the batch driver.
//!
//! The core converter always takes an explicit variant; choosing it from
//! the file name is driver policy and lives here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use drl_core::{DrlDocument, convert_workbook};
use drl_ingest::read_file;
use drl_model::{GeneratorOptions, Variant};

/// File name converted with the draft workflow variant by default.
pub const DRAFT_SENTINEL_FILE: &str = "DraftWorkflowRules.xls";

/// Extension of generated rule files.
pub const DRL_EXTENSION: &str = "drl";

/// How the variant of each input file is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSelection {
    /// Draft for the file named `draft_file` (case-insensitive), order otherwise.
    ByFileName { draft_file: String },
    /// The same variant for every file.
    Fixed(Variant),
}

impl Default for VariantSelection {
    fn default() -> Self {
        Self::ByFileName {
            draft_file: DRAFT_SENTINEL_FILE.to_string(),
        }
    }
}

impl VariantSelection {
    /// Returns the variant to convert `path` with.
    pub fn select(&self, path: &Path) -> Variant {
        match self {
            Self::Fixed(variant) => *variant,
            Self::ByFileName { draft_file } => {
                let is_draft = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.to_lowercase() == draft_file.to_lowercase());
                if is_draft {
                    Variant::DraftWorkflow
                } else {
                    Variant::OrderWorkflow
                }
            }
        }
    }
}

/// Reads one spreadsheet and converts it.
pub fn convert_file(
    path: &Path,
    variant: Variant,
    options: &GeneratorOptions,
) -> Result<DrlDocument> {
    let bytes = read_file(path)?;
    let document = convert_workbook(&bytes, variant, options)
        .with_context(|| format!("convert {}", path.display()))?;
    Ok(document)
}

/// Returns where the document generated from `source` is written.
///
/// The source's folder structure below `input_dir` is mirrored below
/// `output_dir` so files with the same name in different folders do not
/// collide.
pub fn output_path(input_dir: &Path, output_dir: &Path, source: &Path) -> PathBuf {
    let relative = source.strip_prefix(input_dir).unwrap_or(source);
    let mut target = match relative.parent() {
        Some(parent) if !relative.is_absolute() => output_dir.join(parent),
        _ => output_dir.to_path_buf(),
    };
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rules".to_string());
    target.push(format!("{stem}.{DRL_EXTENSION}"));
    target
}

/// Writes a document, creating parent folders as needed.
pub fn write_document(path: &Path, document: &DrlDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output folder {}", parent.display()))?;
    }
    std::fs::write(path, document.text())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
