//! Artifact file names.
//!
//! `ND{type}_{document}{_flag}.{origin}`, e.g. `ND01_4567890_1.0001`.

use std::path::{Path, PathBuf};

use ndc_model::A560Record;

use crate::builder::{leaf_text, padded_text};

pub const ARTIFACT_PREFIX: &str = "ND";
pub const ARCHIVE_EXTENSION: &str = "zip";

const DOCUMENT_SEGMENT_WIDTH: usize = 7;
const DOCUMENT_SEGMENT_FILLER: char = '_';
const ORIGIN_UNIT_WIDTH: usize = 4;

/// File name of the artifact generated for `record`.
///
/// Distinct records may share a name; nothing here detects that.
pub fn artifact_name(record: &A560Record) -> String {
    let header = &record.header;
    format!(
        "{ARTIFACT_PREFIX}{file_type}_{document}{suffix}.{origin}",
        file_type = leaf_text(&header.file_type),
        document = document_segment(&leaf_text(&record.first.document_number)),
        suffix = partial_suffix(&header.partial_flag.render()),
        origin = padded_text(&header.origin_unit, ORIGIN_UNIT_WIDTH),
    )
}

/// Right-most seven characters of the document number, left-filled with `_`.
pub fn document_segment(document_number: &str) -> String {
    let chars: Vec<char> = document_number.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(DOCUMENT_SEGMENT_WIDTH)..]
        .iter()
        .collect();
    let fill = DOCUMENT_SEGMENT_WIDTH - tail.chars().count();
    let mut segment: String = std::iter::repeat_n(DOCUMENT_SEGMENT_FILLER, fill).collect();
    segment.push_str(&tail);
    segment
}

/// `_1` or `_2` for partial files, empty for anything else.
pub fn partial_suffix(flag: &str) -> String {
    match flag {
        "1" | "2" => format!("_{flag}"),
        _ => String::new(),
    }
}

/// Archive path for an artifact: the final extension becomes `.zip`.
pub fn archive_name(artifact: &Path) -> PathBuf {
    artifact.with_extension(ARCHIVE_EXTENSION)
}
