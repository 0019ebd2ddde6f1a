//! Watches a store's collection file for changes made by other processes.
//!
//! Uses the `notify` crate for cross-platform file system events
//! (FSEvents on macOS, inotify on Linux, ReadDirectoryChanges on Windows).
//! The store directory is watched rather than the file itself, since saves
//! replace the file by renaming a temp file over it.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use tally_core::TallyError;

use crate::FileStore;

/// Events emitted by the store watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection file was written or replaced.
    Changed(PathBuf),
    /// The collection file was deleted.
    Removed(PathBuf),
}

/// Emits a [`StoreEvent`] whenever the watched store's file changes.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    receiver: mpsc::Receiver<StoreEvent>,
}

impl StoreWatcher {
    /// Start watching `store`'s collection file.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Io`] if the watcher cannot be created.
    pub fn start(store: &FileStore) -> Result<Self, TallyError> {
        let (tx, rx) = mpsc::channel();
        let file_name: OsString = store
            .path()
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "store watcher error");
                    return;
                }
            };
            for path in &event.paths {
                // Temp files and other keys share the directory
                if path.file_name() != Some(file_name.as_os_str()) {
                    continue;
                }

                let store_event = match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) => {
                        StoreEvent::Changed(path.clone())
                    }
                    EventKind::Remove(_) => StoreEvent::Removed(path.clone()),
                    _ => continue,
                };
                let _ = tx.send(store_event);
            }
        })
        .map_err(|e| TallyError::Io(std::io::Error::other(e)))?;

        watcher
            .watch(store.dir(), RecursiveMode::NonRecursive)
            .map_err(|e| TallyError::Io(std::io::Error::other(e)))?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Receive the next event, waiting at most `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StoreEvent> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Receive the next event if one is already queued.
    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for one event, then drain any burst that follows
    /// it. Returns `true` if anything arrived.
    pub fn wait_for_change(&self, timeout: Duration) -> bool {
        if self.recv_timeout(timeout).is_none() {
            return false;
        }
        while self.recv_timeout(Duration::from_millis(50)).is_some() {}
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::fs;
    use tally_core::{Counter, Descriptors, Store};

    fn counter(label: &str) -> Counter {
        Counter::new(label, "#3b82f6", Descriptors::default(), Utc::now())
    }

    #[test]
    fn watcher_detects_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        let watcher = StoreWatcher::start(&store).unwrap();

        store.save(&[counter("Cuarzo")]).unwrap();

        let event = watcher.recv_timeout(Duration::from_secs(2));
        assert!(event.is_some(), "Expected watcher to detect the save");
        match event.unwrap() {
            StoreEvent::Changed(path) => {
                assert!(path.to_string_lossy().contains("mineral_counters.json"));
            }
            other => panic!("Expected Changed event, got {other:?}"),
        }
    }

    #[test]
    fn watcher_detects_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.save(&[counter("Cuarzo")]).unwrap();

        let watcher = StoreWatcher::start(&store).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        fs::remove_file(store.path()).unwrap();

        // Some backends emit a Changed event before Removed.
        let mut found_removed = false;
        for _ in 0..10 {
            match watcher.recv_timeout(Duration::from_secs(2)) {
                Some(StoreEvent::Removed(path)) => {
                    assert!(path.to_string_lossy().contains("mineral_counters.json"));
                    found_removed = true;
                    break;
                }
                Some(StoreEvent::Changed(_)) => continue,
                None => break,
            }
        }
        assert!(found_removed, "Expected watcher to emit Removed event");
    }

    #[test]
    fn watcher_ignores_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let mut other = FileStore::with_key(dir.path(), "other_sample").unwrap();
        let watcher = StoreWatcher::start(&store).unwrap();

        other.save(&[counter("Calcita")]).unwrap();
        fs::write(dir.path().join("notes.txt"), "plain text").unwrap();

        let event = watcher.recv_timeout(Duration::from_millis(500));
        assert!(event.is_none(), "Watcher should ignore other files");
    }

    #[test]
    fn wait_for_change_times_out_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let watcher = StoreWatcher::start(&store).unwrap();
        assert!(!watcher.wait_for_change(Duration::from_millis(200)));
        assert!(watcher.try_recv().is_none());
    }
}
