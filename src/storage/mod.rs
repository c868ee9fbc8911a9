//! Persisted key-value state
//!
//! Values are JSON strings stored under flat keys, and every write replaces
//! the whole value. Readers never fail: anything missing or unreadable is
//! replaced by a default (see [`records`]).

pub mod records;

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use records::ScoreRecord;

/// A string-to-string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an I/O error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: String) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Store that lives only as long as the process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> io::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The file is read once when opened and rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing or unreadable file opens as an empty store; it is created on
    /// the first write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries).map_err(io::Error::other)?;
        fs::write(&self.path, content)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> io::Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mastermind-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", "1".to_string()).unwrap();
        store.set("a", "2".to_string()).unwrap();
        assert_eq!(store.get("a"), Some("2".to_string()));

        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        store.set("settings", r#"{"rows":3}"#.to_string()).unwrap();
        store.set("score_3_5_DA", "7".to_string()).unwrap();
        store.remove("score_3_5_DA").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("settings"), Some(r#"{"rows":3}"#.to_string()));
        assert_eq!(reopened.get("score_3_5_DA"), None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_store_opens_missing_file_empty() {
        let store = FileStore::open(temp_path("missing-does-not-exist"));
        assert_eq!(store.get("settings"), None);
    }

    #[test]
    fn file_store_opens_corrupt_file_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("settings"), None);

        store.set("settings", "{}".to_string()).unwrap();
        assert_eq!(FileStore::open(&path).get("settings"), Some("{}".to_string()));

        fs::remove_file(&path).unwrap();
    }
}
