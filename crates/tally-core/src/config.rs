//! Tally configuration.
//!
//! Read from `<data_dir>/config.toml` when present, then overridden by
//! environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `TALLY_STORAGE_KEY` | `storage_key` |
//! | `TALLY_EXPORT_PREFIX` | `export_prefix` |
//!
//! The data directory itself is resolved by [`resolve_data_dir`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::store::STORAGE_KEY;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Data directory used when neither a flag nor `TALLY_DATA_DIR` is given.
pub const DEFAULT_DATA_DIR: &str = ".tally";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Key the counter collection is stored under.
    pub storage_key: String,
    /// File name prefix for exports (`<prefix>-YYYY-MM-DD.json`).
    pub export_prefix: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            export_prefix: "mineral-counters".to_string(),
        }
    }
}

impl TallyConfig {
    /// Load `<data_dir>/config.toml`, falling back to defaults when it is
    /// missing or unreadable, then apply environment overrides.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        Self::from_file(&data_dir.join(CONFIG_FILE)).with_env_overrides()
    }

    fn from_file(path: &Path) -> Self {
        std::fs::read_to_string(path).map_or_else(
            |_| Self::default(),
            |contents| match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
        )
    }

    /// Apply `TALLY_*` environment overrides. Empty values are ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = non_empty_env("TALLY_STORAGE_KEY") {
            self.storage_key = key;
        }
        if let Some(prefix) = non_empty_env("TALLY_EXPORT_PREFIX") {
            self.export_prefix = prefix;
        }
        self
    }

    /// Write this config to `<data_dir>/config.toml`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Config`] if serialization fails and
    /// [`TallyError::Io`] if the file cannot be written.
    pub fn write(&self, data_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(CONFIG_FILE);
        let contents = toml::to_string(self).map_err(|e| TallyError::Config(e.to_string()))?;
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Pick the data directory: explicit flag, then `TALLY_DATA_DIR`, then
/// [`DEFAULT_DATA_DIR`] relative to the working directory.
#[must_use]
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    non_empty_env("TALLY_DATA_DIR").map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
