//! Raw row to finished document, the pure per-record step.

use ndc_map::{MappingOptions, map_record};
use ndc_model::RawRecord;
use tracing::debug_span;

use crate::builder::build_document;
use crate::document::A560Document;
use crate::error::TransformError;
use crate::format::FormatWarning;
use crate::naming::artifact_name;

/// Everything the output layer needs to persist one record.
#[derive(Debug, Clone)]
pub struct TransformedRecord {
    pub document: A560Document,
    pub artifact_name: String,
    pub warnings: Vec<FormatWarning>,
}

/// Map, build, hash and name one record. Touches no shared state.
pub fn transform_record(
    raw: &RawRecord,
    options: &MappingOptions,
) -> Result<TransformedRecord, TransformError> {
    let span = debug_span!("transform", fields = raw.len());
    let _guard = span.enter();

    let record = map_record(raw, options)?;
    let built = build_document(&record)?;
    Ok(TransformedRecord {
        artifact_name: artifact_name(&record),
        document: built.document,
        warnings: built.warnings,
    })
}
