//! # tally-store
//!
//! File-backed key-value store for the counter collection.
//!
//! A store is a directory; the value for key `k` lives in `<dir>/k.json`.
//! The manager only ever uses one key, so in practice the directory holds
//! a single collection file next to the config.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tally_core::store::{decode_collection, encode_collection, Store, STORAGE_KEY};
use tally_core::{Counter, Result, TallyError};

pub mod watcher;

pub use watcher::{StoreEvent, StoreWatcher};

/// A [`Store`] that keeps the collection in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    /// Open (creating if needed) a store directory using the default key.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Io`] if the directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self> {
        Self::with_key(dir, STORAGE_KEY)
    }

    /// Open a store directory using `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Store`] if the key contains anything other than
    /// ASCII letters, digits, `_` or `-`, and [`TallyError::Io`] if the
    /// directory cannot be created.
    pub fn with_key(dir: &Path, key: &str) -> Result<Self> {
        validate_key(key)?;
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            key: key.to_string(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path of the file holding this store's key.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", self.key))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(TallyError::Store(format!(
            "invalid storage key '{key}': use letters, digits, '_' or '-'"
        )))
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<Vec<Counter>>> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let counters = decode_collection(&raw)?;
        tracing::debug!(path = %path.display(), count = counters.len(), "read collection");
        Ok(Some(counters))
    }

    /// Write to a sibling temp file, then rename it over the target.
    fn save(&mut self, counters: &[Counter]) -> Result<()> {
        let raw = encode_collection(counters)?;
        let tmp = self.temp_path();
        let written =
            write_synced(&tmp, raw.as_bytes()).and_then(|()| fs::rename(&tmp, self.path()));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %tmp.display(),
                        error = %cleanup,
                        "could not remove temp file after failed save"
                    );
                }
            }
            return Err(e.into());
        }
        self.sync_dir();
        tracing::trace!(count = counters.len(), "wrote collection");
        Ok(())
    }
}

impl FileStore {
    /// Flush the rename to disk. Failure is logged, not returned.
    fn sync_dir(&self) {
        if let Ok(dir) = fs::File::open(&self.dir) {
            if let Err(e) = dir.sync_all() {
                tracing::warn!(
                    dir = %self.dir.display(),
                    error = %e,
                    "directory fsync failed after save"
                );
            }
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
