//! `ndc.toml` configuration.
//!
//! Every key is optional; missing keys take the defaults below. Command line
//! flags are applied on top by the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ndc_ingest::IngestOptions;
use ndc_map::MappingOptions;
use ndc_model::DEFAULT_PROTOCOL_VERSION;
use ndc_output::{ArchiveOptions, OutputOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ndc.toml";

pub const DEFAULT_OUTPUT_DIR: &str = "saida";

pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    /// Log progress every N records; 0 disables it.
    pub progress_interval: usize,
    pub defaults: DefaultsConfig,
    pub archive: ArchiveConfig,
    pub validation: ValidationConfig,
    /// Source column name to expected field name.
    pub columns: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub protocol_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub level: u8,
    pub remove_original: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub require_fields: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            defaults: DefaultsConfig::default(),
            archive: ArchiveConfig::default(),
            validation: ValidationConfig::default(),
            columns: BTreeMap::new(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        let options = ArchiveOptions::default();
        Self {
            enabled: true,
            level: options.level,
            remove_original: options.remove_original,
        }
    }
}

impl AppConfig {
    /// Load `path`, or `ndc.toml` from the working directory when present.
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };
        let text =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        let config =
            Self::from_toml_str(&text).with_context(|| format!("parse {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.archive.level > ndc_output::archive::MAX_LEVEL {
            bail!(
                "archive.level must be between 0 and {}, got {}",
                ndc_output::archive::MAX_LEVEL,
                self.archive.level
            );
        }
        if self.defaults.protocol_version.trim().is_empty() {
            bail!("defaults.protocol_version must not be blank");
        }
        Ok(())
    }

    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions {
            require_fields: self.validation.require_fields,
            default_protocol_version: self.defaults.protocol_version.clone(),
        }
    }

    pub fn ingest_options(&self, delimiter: Option<u8>) -> IngestOptions {
        IngestOptions {
            delimiter,
            aliases: self.columns.clone(),
        }
    }

    pub fn archive_options(&self) -> Option<ArchiveOptions> {
        self.archive.enabled.then_some(ArchiveOptions {
            level: self.archive.level,
            remove_original: self.archive.remove_original,
        })
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            output_dir: self.output_dir.clone(),
            archive: self.archive_options(),
        }
    }
}
