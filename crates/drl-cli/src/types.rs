use std::path::PathBuf;

use drl_model::Variant;

#[derive(Debug)]
pub struct BatchResult {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub files: Vec<FileSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub path: PathBuf,
    pub variant: Variant,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Converted {
        rules: usize,
        skipped_rows: usize,
        output: Option<PathBuf>,
    },
    Failed {
        error: String,
    },
}

impl BatchResult {
    pub fn converted_count(&self) -> usize {
        self.files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Converted { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.files.len() - self.converted_count()
    }
}
