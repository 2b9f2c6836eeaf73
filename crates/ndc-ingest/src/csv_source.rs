use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::error::IngestError;
use crate::table::{SourceTable, TableBuilder, text_cell};

const CANDIDATE_DELIMITERS: [u8; 3] = [b';', b',', b'\t'];

/// Reader switches.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Field delimiter; sniffed from the header line when `None`. CSV only.
    pub delimiter: Option<u8>,
    /// Source column name to expected field name.
    pub aliases: BTreeMap<String, String>,
}

/// Load every data row of the CSV at `path`.
pub fn read_csv(path: &Path, options: &IngestOptions) -> Result<SourceTable, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, encoding) = decode(&bytes);
    let mut table = parse_records(&text, options)?;
    table.encoding = encoding;
    Ok(table)
}

/// Parse CSV text whose first non-blank row is the header.
pub fn parse_records(text: &str, options: &IngestOptions) -> Result<SourceTable, IngestError> {
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| sniff_delimiter(text));
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut table = TableBuilder::new(&options.aliases);
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Csv {
            line: source.position().map_or(0, |position| position.line()),
            source,
        })?;
        table.push_row(row.iter().map(text_cell).collect());
    }
    let table = table.finish(UTF_8.name())?;
    debug!(
        delimiter = %char::from(delimiter),
        records = table.records.len(),
        "csv parsed"
    );
    Ok(table)
}

/// UTF-8 when the bytes are valid UTF-8 (BOM or not), windows-1252 otherwise.
fn decode(bytes: &[u8]) -> (String, &'static str) {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return (text.into_owned(), UTF_8.name());
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    debug!("source is not valid UTF-8, decoded as windows-1252");
    (text.into_owned(), WINDOWS_1252.name())
}

/// Pick the candidate delimiter occurring most often on the first line.
fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    CANDIDATE_DELIMITERS
        .iter()
        .copied()
        .max_by_key(|candidate| {
            let count = first_line.bytes().filter(|byte| byte == candidate).count();
            // ties resolve to the earlier candidate
            (count, std::cmp::Reverse(position(*candidate)))
        })
        .filter(|candidate| first_line.as_bytes().contains(candidate))
        .unwrap_or(b',')
}

fn position(delimiter: u8) -> usize {
    CANDIDATE_DELIMITERS
        .iter()
        .position(|candidate| *candidate == delimiter)
        .unwrap_or(CANDIDATE_DELIMITERS.len())
}
