//! JSON-file-backed key-value store
//!
//! Backs the CLI binary. The whole store is one JSON object on disk; it
//! is read once at open and rewritten after every `set`. I/O failures are
//! logged and swallowed so a broken disk degrades to an in-memory game.

use super::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Key-value store persisted as a single JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    cache: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store, loading existing contents if the file is readable
    ///
    /// A missing file starts empty; an unreadable or malformed file is
    /// logged and also starts empty.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed store file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "store file unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, cache }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.cache) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize store");
                return;
            }
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(err) = fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), %err, "failed to create store directory");
            return;
        }
        if let Err(err) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), %err, "failed to write store file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.cache.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("k"), None);
        store.set("k", "v");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("k"), Some("v".to_string()));
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path);
        store.set("k", "v");

        assert_eq!(FileStore::open(&path).get("k"), Some("v".to_string()));
    }
}
