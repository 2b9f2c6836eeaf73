//! Row accumulation shared by every source format.

use std::collections::BTreeMap;

use ndc_model::{CellValue, RawRecord};
use tracing::warn;

use crate::error::IngestError;

/// Parsed source: header names after aliasing plus one record per data row.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
    /// Charset the text was decoded with, or the workbook format.
    pub encoding: &'static str,
}

impl SourceTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The first non-blank row becomes the header, every later non-blank row a record.
pub(crate) struct TableBuilder<'a> {
    aliases: &'a BTreeMap<String, String>,
    headers: Option<Vec<String>>,
    records: Vec<RawRecord>,
}

impl<'a> TableBuilder<'a> {
    pub(crate) fn new(aliases: &'a BTreeMap<String, String>) -> Self {
        Self {
            aliases,
            headers: None,
            records: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, cells: Vec<CellValue>) {
        if cells.iter().all(CellValue::is_blank) {
            return;
        }
        let Some(headers) = &self.headers else {
            self.headers = Some(self.header_names(&cells));
            return;
        };
        let mut record = RawRecord::new();
        let mut cells = cells.into_iter();
        for header in headers {
            let cell = cells.next().unwrap_or_default();
            if !header.is_empty() {
                record.insert(header.as_str(), cell);
            }
        }
        self.records.push(record);
    }

    pub(crate) fn finish(self, encoding: &'static str) -> Result<SourceTable, IngestError> {
        Ok(SourceTable {
            headers: self.headers.ok_or(IngestError::MissingHeader)?,
            records: self.records,
            encoding,
        })
    }

    fn header_names(&self, cells: &[CellValue]) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(cells.len());
        for cell in cells {
            let rendered = cell.render();
            let header = normalize_cell(&rendered);
            let name = self
                .aliases
                .get(header)
                .cloned()
                .unwrap_or_else(|| header.to_string());
            if !name.is_empty() && names.contains(&name) {
                warn!(column = %name, "duplicate column, later values win");
            }
            names.push(name);
        }
        names
    }
}

pub(crate) fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Trimmed text cell; empty text becomes [`CellValue::Empty`].
pub(crate) fn text_cell(raw: &str) -> CellValue {
    match normalize_cell(raw) {
        "" => CellValue::Empty,
        text => CellValue::from(text),
    }
}
