use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use drl_ingest::list_spreadsheet_files;
use drl_model::{GeneratorOptions, Variant};
use tracing::{error, info, info_span};

use drl_cli::pipeline::{VariantSelection, convert_file, output_path, write_document};

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;
use crate::types::{BatchResult, FileStatus, FileSummary};

pub fn run_variants() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Variant", "Fact type", "Rule name", "Required headers"]);
    apply_table_style(&mut table);
    for variant in Variant::ALL {
        let template = variant.template();
        table.add_row(vec![
            variant.as_str().to_string(),
            template.fact_type.to_string(),
            template.rule_name.to_string(),
            variant.required_headers().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<BatchResult> {
    let stdout = io::stdout();
    run_convert_with_output(args, &mut stdout.lock())
}

/// Runs a batch, writing generated documents to `out` when no output
/// folder is configured.
fn run_convert_with_output<W: Write>(args: &ConvertArgs, out: &mut W) -> Result<BatchResult> {
    let input_dir = &args.input_dir;
    let batch_span = info_span!("convert", input_dir = %input_dir.display());
    let _batch_guard = batch_span.enter();

    let selection = match args.variant {
        Some(variant) => VariantSelection::Fixed(variant),
        None => VariantSelection::ByFileName {
            draft_file: args.draft_file.clone(),
        },
    };
    let options = GeneratorOptions::new().with_package(args.package.clone());

    let files = list_spreadsheet_files(input_dir, &args.extension)
        .with_context(|| format!("list spreadsheets in {}", input_dir.display()))?;
    info!(file_count = files.len(), "discovered spreadsheets");

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(files.len());
    for path in files {
        let variant = selection.select(&path);
        let file_span = info_span!("file", path = %path.display(), variant = %variant);
        let _file_guard = file_span.enter();
        info!("processing file");
        if args.output_dir.is_none() {
            writeln!(out, "Processing file: {}", path.display()).context("write to stdout")?;
        }

        let outcome = convert_file(&path, variant, &options).and_then(|document| {
            let output = match &args.output_dir {
                Some(output_dir) => {
                    let target = output_path(input_dir, output_dir, &path);
                    write_document(&target, &document)?;
                    info!(output = %target.display(), "wrote rule file");
                    Some(target)
                }
                None => {
                    writeln!(out, "Generated DRL:\n{document}").context("write to stdout")?;
                    None
                }
            };
            Ok(FileStatus::Converted {
                rules: document.rule_count(),
                skipped_rows: document.skipped_rows.len(),
                output,
            })
        });

        let status = outcome.unwrap_or_else(|err| {
            error!(error = %format!("{err:#}"), "failed to process file");
            eprintln!("Failed to process file: {} - {err:#}", path.display());
            FileStatus::Failed {
                error: format!("{err:#}"),
            }
        });
        summaries.push(FileSummary {
            path,
            variant,
            status,
        });
    }

    let result = BatchResult {
        input_dir: input_dir.clone(),
        output_dir: args.output_dir.clone(),
        has_errors: summaries
            .iter()
            .any(|file| matches!(file.status, FileStatus::Failed { .. })),
        files: summaries,
    };
    info!(
        converted = result.converted_count(),
        failed = result.failed_count(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
    Ok(result)
}
