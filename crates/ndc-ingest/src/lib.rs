//! Source ingestion: turns a CSV export or a spreadsheet workbook into
//! [`RawRecord`]s keyed by the expected field names.
//!
//! [`RawRecord`]: ndc_model::RawRecord

pub mod csv_source;
pub mod error;
mod table;
pub mod workbook;

use std::path::Path;

use tracing::info;

pub use csv_source::{IngestOptions, parse_records, read_csv};
pub use error::IngestError;
pub use table::SourceTable;
pub use workbook::{is_workbook, read_workbook};

/// Load every data row of `path`: workbooks by extension, CSV otherwise.
pub fn read_records(path: &Path, options: &IngestOptions) -> Result<SourceTable, IngestError> {
    let table = if is_workbook(path) {
        read_workbook(path, options)?
    } else {
        read_csv(path, options)?
    };
    info!(
        path = %path.display(),
        records = table.records.len(),
        columns = table.headers.len(),
        encoding = table.encoding,
        "source loaded"
    );
    Ok(table)
}
