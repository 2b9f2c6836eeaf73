//! Machine-readable batch report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ndc_model::{BatchContext, RecordFailure, RecordOutcome};
use ndc_output::write_durably;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub source: &'a Path,
    pub output_dir: &'a Path,
    pub dry_run: bool,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub warnings: usize,
    pub outcomes: &'a [RecordOutcome],
    pub failures: &'a [RecordFailure],
}

impl<'a> BatchReport<'a> {
    pub fn new(context: &'a BatchContext, dry_run: bool) -> Self {
        Self {
            source: &context.source,
            output_dir: &context.output_dir,
            dry_run,
            total: context.total(),
            succeeded: context.succeeded(),
            failed: context.failed(),
            warnings: context.warnings(),
            outcomes: context.outcomes(),
            failures: context.failures(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize batch report")
    }
}

/// Write the report as pretty JSON to `path`.
pub fn write_json_report(report: &BatchReport<'_>, path: &Path) -> Result<PathBuf> {
    let json = report.to_json()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("report path has no file name: {}", path.display()))?;
    write_durably(dir, name, json.as_bytes())
}
