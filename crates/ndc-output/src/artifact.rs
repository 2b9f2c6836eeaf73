use std::path::PathBuf;

use anyhow::Result;
use ndc_core::TransformedRecord;
use tracing::debug;

use crate::archive::{ArchiveOptions, archive_artifact};
use crate::persist::write_durably;
use crate::xml::encode_artifact;

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub output_dir: PathBuf,
    /// `None` leaves the plain artifact in place.
    pub archive: Option<ArchiveOptions>,
}

/// Where one record ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// `None` once the archive replaced it.
    pub artifact_path: Option<PathBuf>,
    pub archive_path: Option<PathBuf>,
    pub bytes: usize,
}

/// Serialize, write and optionally archive one transformed record.
pub fn write_record(record: &TransformedRecord, options: &OutputOptions) -> Result<WrittenArtifact> {
    let bytes = encode_artifact(&record.document)?;
    let path = write_durably(&options.output_dir, &record.artifact_name, &bytes)?;
    debug!(artifact = %path.display(), bytes = bytes.len(), "artifact written");

    let Some(archive) = &options.archive else {
        return Ok(WrittenArtifact {
            artifact_path: Some(path),
            archive_path: None,
            bytes: bytes.len(),
        });
    };
    let outcome = archive_artifact(&path, archive)?;
    Ok(WrittenArtifact {
        artifact_path: (!outcome.original_removed).then_some(path),
        archive_path: Some(outcome.archive_path),
        bytes: bytes.len(),
    })
}
