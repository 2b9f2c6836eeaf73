use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Table};
use ndc_cli::config::AppConfig;
use ndc_cli::pipeline::{PipelineOptions, run_batch};
use ndc_cli::report::{BatchReport, write_json_report};
use ndc_core::transform_record;
use ndc_ingest::read_records;
use ndc_map::{REQUIRED_FIELDS, expected_fields};
use ndc_model::BatchContext;
use ndc_output::render_xml;
use tracing::info;

use crate::cli::{GenerateArgs, InspectArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

const FIRST_DATA_ROW: usize = 2;

pub fn run_generate(args: &GenerateArgs, mut config: AppConfig) -> Result<BatchContext> {
    apply_overrides(&mut config, args);
    let delimiter = delimiter_byte(args.delimiter)?;
    let table = read_records(&args.input, &config.ingest_options(delimiter))
        .with_context(|| format!("load {}", args.input.display()))?;

    let options = PipelineOptions {
        mapping: config.mapping_options(),
        output: config.output_options(),
        dry_run: args.dry_run,
        progress_interval: config.progress_interval,
    };
    let context = BatchContext::new(&args.input, &config.output_dir, table.len());
    let context = run_batch(context, &table.records, &options);

    if let Some(path) = &args.report_json {
        let written = write_json_report(&BatchReport::new(&context, args.dry_run), path)?;
        info!(report = %written.display(), "report written");
    }
    Ok(context)
}

fn apply_overrides(config: &mut AppConfig, args: &GenerateArgs) {
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.no_archive {
        config.archive.enabled = false;
    }
    if args.keep_original {
        config.archive.remove_original = false;
    }
    if args.require_fields {
        config.validation.require_fields = true;
    }
}

fn delimiter_byte(delimiter: Option<char>) -> Result<Option<u8>> {
    match delimiter {
        None => Ok(None),
        Some(ch) if ch.is_ascii() => Ok(Some(ch as u8)),
        Some(ch) => bail!("delimiter must be a single ASCII character, got {ch:?}"),
    }
}

pub fn run_inspect(args: &InspectArgs, config: &AppConfig) -> Result<()> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let table = read_records(&args.input, &config.ingest_options(delimiter))
        .with_context(|| format!("load {}", args.input.display()))?;
    let last_row = table.len() + FIRST_DATA_ROW - 1;
    if args.row < FIRST_DATA_ROW || args.row > last_row {
        bail!(
            "row {} is outside the data rows {FIRST_DATA_ROW}..={last_row}",
            args.row
        );
    }
    let raw = &table.records[args.row - FIRST_DATA_ROW];
    let transformed = transform_record(raw, &config.mapping_options())
        .with_context(|| format!("row {}", args.row))?;

    println!("Artifact: {}", transformed.artifact_name);
    println!("Digest:   {}", transformed.document.hash());
    for warning in &transformed.warnings {
        println!("Warning:  {warning}");
    }
    println!();
    println!("{}", render_xml(&transformed.document)?);
    Ok(())
}

pub fn run_fields() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Required")]);
    apply_table_style(&mut table);
    for field in expected_fields() {
        let required = if REQUIRED_FIELDS.contains(&field.as_str()) {
            Cell::new("yes")
        } else {
            dim_cell("-")
        };
        table.add_row(vec![Cell::new(field), required]);
    }
    println!("{table}");
}
