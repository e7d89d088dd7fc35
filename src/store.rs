//! File-backed implementation of the engine's [`RecentStore`] port.
//!
//! Recency is a convenience, so persistence problems must never take the
//! search down: every filesystem or parse failure degrades to an empty or
//! unsaved store with a warning in the log.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use wayfinder_engine::RecentStore;

/// Key-value store kept as one small JSON object on disk.
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt store");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            tracing::warn!(path = %self.path.display(), error = %err, "cannot create store directory");
            return;
        }
        match serde_json::to_string_pretty(&self.entries) {
            Ok(text) => {
                if let Err(err) = fs::write(&self.path, text) {
                    tracing::warn!(path = %self.path.display(), error = %err, "failed to persist store");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize store");
            }
        }
    }
}

impl RecentStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
