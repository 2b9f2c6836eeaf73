//! Batch pipeline: one source table in, one artifact per record out.
//!
//! Records are independent. A failing record is logged and recorded in the
//! [`BatchContext`]; the batch always runs to the end.

use anyhow::Result;
use ndc_core::transform_record;
use ndc_map::MappingOptions;
use ndc_model::{BatchContext, RawRecord, RecordOutcome, spreadsheet_row};
use ndc_output::{OutputOptions, write_record};
use tracing::{debug, error, info, info_span, warn};

use crate::logging::redact_value;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub mapping: MappingOptions,
    pub output: OutputOptions,
    /// Transform and hash without touching the filesystem.
    pub dry_run: bool,
    /// Log progress every N records; 0 disables it.
    pub progress_interval: usize,
}

/// Transform one record and, unless dry-running, write it out.
pub fn process_record(row: usize, raw: &RawRecord, options: &PipelineOptions) -> Result<RecordOutcome> {
    let transformed = transform_record(raw, &options.mapping)?;
    for warning in &transformed.warnings {
        warn!(
            row,
            field = %warning.field,
            kind = %warning.kind,
            value = %redact_value(&warning.value),
            "value replaced by default"
        );
    }

    let mut outcome = RecordOutcome {
        row,
        artifact_name: transformed.artifact_name.clone(),
        digest: transformed.document.hash().to_string(),
        artifact_path: None,
        archive_path: None,
        warnings: transformed.warnings.len(),
    };
    if options.dry_run {
        return Ok(outcome);
    }

    let written = write_record(&transformed, &options.output)?;
    outcome.artifact_path = written.artifact_path;
    outcome.archive_path = written.archive_path;
    Ok(outcome)
}

/// Run every record through [`process_record`], accumulating into `context`.
pub fn run_batch(
    mut context: BatchContext,
    records: &[RawRecord],
    options: &PipelineOptions,
) -> BatchContext {
    let batch_span = info_span!("batch", source = %context.source.display());
    let _batch_guard = batch_span.enter();
    info!(
        records = records.len(),
        output = %context.output_dir.display(),
        dry_run = options.dry_run,
        "batch started"
    );

    for (index, raw) in records.iter().enumerate() {
        let row = spreadsheet_row(index);
        let record_span = info_span!("record", row);
        let _record_guard = record_span.enter();

        match process_record(row, raw, options) {
            Ok(outcome) => {
                debug!(
                    artifact = %outcome.artifact_name,
                    digest = %outcome.digest,
                    warnings = outcome.warnings,
                    "record processed"
                );
                context.record_success(outcome);
            }
            Err(err) => {
                let message = format!("{err:#}");
                error!(error = %message, "record failed");
                context.record_failure(row, message);
            }
        }

        let processed = context.processed();
        if options.progress_interval > 0 && processed % options.progress_interval == 0 {
            info!(processed, total = context.total(), "progress");
        }
    }

    info!(
        total = context.total(),
        succeeded = context.succeeded(),
        failed = context.failed(),
        warnings = context.warnings(),
        "batch finished"
    );
    context
}
