use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Write `bytes` to `dir/name` through a synced temp file and an atomic rename.
pub fn write_durably(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(name);
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    temp.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    temp.persist(&path)
        .map_err(|err| err.error)
        .with_context(|| format!("persist {}", path.display()))?;
    Ok(path)
}
