//! Batch bookkeeping, passed explicitly through the batch pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Spreadsheet row for a zero-based data row index (row 1 holds the header).
pub const fn spreadsheet_row(index: usize) -> usize {
    index + 2
}

/// Result of one successfully processed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub row: usize,
    pub artifact_name: String,
    pub digest: String,
    /// Written artifact, `None` on dry runs or once archived and removed.
    pub artifact_path: Option<PathBuf>,
    pub archive_path: Option<PathBuf>,
    pub warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub row: usize,
    pub message: String,
}

/// Counters and per-record results for one source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchContext {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    total: usize,
    outcomes: Vec<RecordOutcome>,
    failures: Vec<RecordFailure>,
}

impl BatchContext {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, total: usize) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            total,
            outcomes: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self, outcome: RecordOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn record_failure(&mut self, row: usize, message: impl Into<String>) {
        self.failures.push(RecordFailure {
            row,
            message: message.into(),
        });
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Records handled so far, successful or not.
    pub fn processed(&self) -> usize {
        self.succeeded() + self.failed()
    }

    pub fn warnings(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.warnings).sum()
    }

    pub fn outcomes(&self) -> &[RecordOutcome] {
        &self.outcomes
    }

    /// Failures in the order they were recorded.
    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
