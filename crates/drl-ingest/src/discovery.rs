//! Input file discovery.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Extension of the legacy Excel workbooks rule sheets are kept in.
pub const DEFAULT_EXTENSION: &str = "xls";

/// Recursively lists regular files under `dir` whose extension equals
/// `extension` (case-insensitive).
///
/// Returns paths in a stable order: entries are visited sorted by file name.
pub fn list_spreadsheet_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry_result in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e,
        })?;

        // Skip directories
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if has_extension(&path, extension) {
            trace!(path = %path.display(), "discovered spreadsheet");
            files.push(path);
        }
    }

    Ok(files)
}

/// Returns true if the path's extension equals `extension`, ignoring case
/// and a leading dot.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}

/// Reads a whole input file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("rules/Order.xls"), "xls"));
        assert!(has_extension(Path::new("rules/Order.XLS"), ".xls"));
        assert!(!has_extension(Path::new("rules/Order.xlsx"), "xls"));
        assert!(!has_extension(Path::new("rules/xls"), "xls"));
    }
}
