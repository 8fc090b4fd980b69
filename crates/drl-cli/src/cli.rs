//! CLI argument definitions for the rule converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use drl_ingest::DEFAULT_EXTENSION;
use drl_model::{DEFAULT_PACKAGE, Variant};
use drl_cli::pipeline::DRAFT_SENTINEL_FILE;

#[derive(Parser)]
#[command(
    name = "xls2drl",
    version,
    about = "Convert workflow rule spreadsheets into DRL rule files",
    long_about = "Convert workflow routing rules kept in spreadsheets into DRL documents.\n\n\
                  Every matching workbook under the input folder is converted on its own;\n\
                  a file that cannot be converted is reported and the batch continues."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every rule spreadsheet under a folder into DRL.
    Convert(ConvertArgs),

    /// List the supported rule variants and their required headers.
    Variants,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Folder searched recursively for rule spreadsheets.
    #[arg(value_name = "RULES_FOLDER")]
    pub input_dir: PathBuf,

    /// Write one `.drl` file per spreadsheet into this folder instead of
    /// printing documents to stdout.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File extension of the spreadsheets to convert.
    #[arg(long = "extension", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// File name (case-insensitive) converted with the draft workflow variant.
    ///
    /// Every other file is converted with the order workflow variant.
    #[arg(long = "draft-file", value_name = "NAME", default_value = DRAFT_SENTINEL_FILE)]
    pub draft_file: String,

    /// Convert every file with this variant instead of choosing by file name.
    ///
    /// Accepts `draft` or `order`, or the fact type names `DraftWorkflowParams`
    /// and `WorkflowParams` (case-insensitive).
    #[arg(long = "variant", value_name = "VARIANT")]
    pub variant: Option<Variant>,

    /// Package declared by the generated documents.
    #[arg(long = "package", value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Exit with a non-zero status if any file fails to convert.
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,

    /// Do not print the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
