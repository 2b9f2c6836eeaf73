//! Spreadsheet workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`).
//!
//! Only the first sheet is read. Numeric cells stay numbers and date-formatted
//! cells become dates, so amounts and serial dates reach the formatters with
//! their cell type intact.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;
use ndc_model::{CellValue, date_from_serial};
use tracing::{debug, warn};

use crate::csv_source::IngestOptions;
use crate::error::IngestError;
use crate::table::{SourceTable, TableBuilder, text_cell};

pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// True when `path` carries a workbook extension (case-insensitive).
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        })
}

/// Load every data row of the first sheet of the workbook at `path`.
pub fn read_workbook(path: &Path, options: &IngestOptions) -> Result<SourceTable, IngestError> {
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .unwrap_or_default();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::MissingHeader)?
        .map_err(workbook_error)?;

    let mut table = TableBuilder::new(&options.aliases);
    for row in range.rows() {
        table.push_row(row.iter().map(cell_value).collect());
    }
    let table = table.finish("workbook")?;
    debug!(
        sheet = %sheet,
        records = table.records.len(),
        "workbook parsed"
    );
    Ok(table)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => text_cell(text),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::from(*value),
        Data::Bool(value) => CellValue::from(value.to_string()),
        Data::DateTime(value) => {
            let serial = value.as_f64();
            date_from_serial(serial).map_or(CellValue::Number(serial), CellValue::Date)
        }
        Data::DateTimeIso(text) => iso_date(text).map_or_else(|| text_cell(text), CellValue::Date),
        Data::DurationIso(text) => text_cell(text),
        Data::Error(error) => {
            warn!(error = %error, "cell holds a formula error, read as empty");
            CellValue::Empty
        }
    }
}

fn iso_date(text: &str) -> Option<NaiveDate> {
    let date = text.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
