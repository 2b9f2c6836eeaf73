//! Single-entry ZIP archival of a written artifact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ndc_core::archive_name;
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const MAX_LEVEL: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// 0 stores the entry uncompressed; 1 to 9 are deflate levels.
    pub level: u8,
    /// Delete the uncompressed artifact once the archive is durable.
    pub remove_original: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            level: MAX_LEVEL,
            remove_original: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub archive_path: PathBuf,
    /// False when removal was disabled or failed.
    pub original_removed: bool,
}

/// Wrap `artifact` into `<stem>.zip` next to it.
///
/// The original is deleted only after the archive has been synced, renamed
/// into place and read back. A failed deletion is logged, not returned.
pub fn archive_artifact(artifact: &Path, options: &ArchiveOptions) -> Result<ArchiveOutcome> {
    if options.level > MAX_LEVEL {
        bail!("compression level {} out of range 0..={MAX_LEVEL}", options.level);
    }
    let entry_name = artifact
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("artifact has no file name: {}", artifact.display()))?;
    let dir = artifact.parent().unwrap_or_else(|| Path::new("."));
    let archive_path = archive_name(artifact);
    let contents =
        fs::read(artifact).with_context(|| format!("read {}", artifact.display()))?;

    let temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    let mut zip = ZipWriter::new(temp);
    zip.start_file(entry_name, entry_options(options.level))
        .with_context(|| format!("start zip entry {entry_name}"))?;
    zip.write_all(&contents)
        .with_context(|| format!("write zip entry {entry_name}"))?;
    let temp = zip
        .finish()
        .with_context(|| format!("finish {}", archive_path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", archive_path.display()))?;
    temp.persist(&archive_path)
        .map_err(|err| err.error)
        .with_context(|| format!("persist {}", archive_path.display()))?;

    verify_archive(&archive_path, entry_name, contents.len())?;
    debug!(
        archive = %archive_path.display(),
        level = options.level,
        bytes = contents.len(),
        "artifact archived"
    );

    let original_removed = options.remove_original && remove_original(artifact);
    Ok(ArchiveOutcome {
        archive_path,
        original_removed,
    })
}

/// Entry options for `level`; the deflate encoder rejects level 0.
fn entry_options(level: u8) -> SimpleFileOptions {
    match level {
        0 => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level))),
    }
}

fn verify_archive(path: &Path, entry_name: &str, expected_size: usize) -> Result<()> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut archive =
        ZipArchive::new(file).with_context(|| format!("read back {}", path.display()))?;
    if archive.len() != 1 {
        bail!("{} holds {} entries, expected 1", path.display(), archive.len());
    }
    let entry = archive
        .by_name(entry_name)
        .with_context(|| format!("{} lacks entry {entry_name}", path.display()))?;
    if entry.size() != expected_size as u64 {
        bail!(
            "{} entry {entry_name} is {} bytes, expected {expected_size}",
            path.display(),
            entry.size()
        );
    }
    Ok(())
}

fn remove_original(artifact: &Path) -> bool {
    match fs::remove_file(artifact) {
        Ok(()) => true,
        Err(err) => {
            warn!(
                artifact = %artifact.display(),
                error = %err,
                "archive written but original could not be removed"
            );
            false
        }
    }
}
