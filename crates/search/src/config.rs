//! Finder configuration via `docfinder.toml`
//!
//! Selects the storage backing and an optional noise-word file. On first
//! use a commented default file can be written with
//! [`FinderConfig::write_default_if_missing`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use docfinder_core::{Error, Result};
use docfinder_storage::SyncMode;

/// Config file name looked up by callers.
pub const CONFIG_FILE_NAME: &str = "docfinder.toml";

/// Which store backs the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// In-process maps, nothing persisted
    #[default]
    Memory,
    /// Append-only log in `data_dir`
    Disk,
}

/// Finder configuration loaded from `docfinder.toml`.
///
/// # Example
///
/// ```toml
/// storage = "disk"
/// data_dir = "/var/lib/docfinder"
/// sync = "always"
/// noise_words = "/etc/docfinder/noise.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Storage backing: `"memory"` or `"disk"`.
    #[serde(default)]
    pub storage: StorageKind,
    /// Directory for the disk store. Required when `storage = "disk"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Sync mode for the disk store: `"always"` or `"buffered"`.
    #[serde(default)]
    pub sync: SyncMode,
    /// File of noise words, one per line, loaded on open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_words: Option<PathBuf>,
}

impl FinderConfig {
    /// In-memory configuration with no noise words
    pub fn memory() -> Self {
        Self::default()
    }

    /// Disk-backed configuration rooted at `data_dir`
    pub fn disk(data_dir: impl Into<PathBuf>) -> Self {
        FinderConfig {
            storage: StorageKind::Disk,
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    /// Builder: set the noise-word file
    pub fn with_noise_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.noise_words = Some(path.into());
        self
    }

    /// Builder: set the sync mode
    pub fn with_sync(mut self, sync: SyncMode) -> Self {
        self.sync = sync;
        self
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the disk store has no `data_dir`.
    pub fn validate(&self) -> Result<()> {
        if self.storage == StorageKind::Disk && self.data_dir.is_none() {
            return Err(Error::bad_input(
                "storage = \"disk\" requires data_dir in docfinder.toml",
            ));
        }
        Ok(())
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the text is not valid TOML for this config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FinderConfig = toml::from_str(content)
            .map_err(|e| Error::bad_input(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docfinder configuration
#
# Storage backing: "memory" (default) or "disk"
#   "memory" = nothing persisted, index lost on exit
#   "disk"   = append-only log in data_dir, replayed on open
storage = "memory"

# Directory for the disk store (required when storage = "disk")
# data_dir = "docfinder-data"

# Sync mode for the disk store: "buffered" (default) or "always"
#   "buffered" = OS decides when to flush, may lose recent writes on crash
#   "always"   = fsync every append
sync = "buffered"

# File of noise words, one per line, excluded from indexing
# noise_words = "noise-words.txt"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::bad_input(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::BadInput(msg) => Error::BadInput(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Load `CONFIG_FILE_NAME` from `dir`, or the in-memory default if
    /// there is no such file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::memory())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
