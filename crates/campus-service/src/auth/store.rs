//! Key-value persistence for the signed-in session.
//!
//! The session lives in two string entries (`user`, `auth_token`). Anything
//! that can get, set and remove a string by key can hold it, so the session
//! service only ever talks to [`KeyValueStore`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// ## Summary
    /// Reads the value stored under `key`.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> ServiceResult<Option<String>>;

    /// ## Summary
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> ServiceResult<()>;

    /// ## Summary
    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> ServiceResult<()>;
}

/// Process-local store, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ServiceResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_poisoned| ServiceError::InvariantViolation("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ServiceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_poisoned| ServiceError::InvariantViolation("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ServiceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_poisoned| ServiceError::InvariantViolation("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every write replaces the whole document through a temporary file in the
/// same directory, so readers see either the old or the new document. A
/// missing file reads as empty, and so does a document that does not parse;
/// the next write replaces it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

/// Entries read from disk, and whether the file held something unreadable.
struct Document {
    entries: BTreeMap<String, String>,
    damaged: bool,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ServiceResult<Document> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Ok(Document {
                entries: BTreeMap::new(),
                damaged: false,
            });
        }
        match serde_json::from_str(&text) {
            Ok(entries) => Ok(Document {
                entries,
                damaged: false,
            }),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Session file is not a JSON object of strings, reading it as empty"
                );
                Ok(Document {
                    entries: BTreeMap::new(),
                    damaged: true,
                })
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> ServiceResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut staged, entries)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ServiceResult<Option<String>> {
        let _guard = self
            .lock
            .read()
            .map_err(|_poisoned| ServiceError::InvariantViolation("file store lock poisoned"))?;
        Ok(self.read_all()?.entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ServiceResult<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|_poisoned| ServiceError::InvariantViolation("file store lock poisoned"))?;
        let mut document = self.read_all()?;
        document.entries.insert(key.to_string(), value.to_string());
        self.write_all(&document.entries)
    }

    fn remove(&self, key: &str) -> ServiceResult<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|_poisoned| ServiceError::InvariantViolation("file store lock poisoned"))?;
        let mut document = self.read_all()?;
        if document.entries.remove(key).is_some() || document.damaged {
            self.write_all(&document.entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("user").unwrap(), None);

        store.set("user", "{}").unwrap();
        store.set("auth_token", "t-1").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));

        store.set("auth_token", "t-2").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("t-2"));

        store.remove("user").unwrap();
        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("t-2"));
    }

    #[test]
    fn memory_store_get_set_remove() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn file_store_get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&FileStore::new(dir.path().join("session.json")));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileStore::new(&path).set("auth_token", "persisted").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("auth_token").unwrap().as_deref(),
            Some("persisted")
        );
    }

    #[test_log::test]
    fn file_store_reads_unparseable_document_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        for damaged in ["[1, 2, 3]", r#"{"user": "{\"id\":"#, r#"{"auth_token": 7}"#] {
            std::fs::write(&path, damaged).unwrap();
            let store = FileStore::new(&path);
            assert_eq!(store.get("user").unwrap(), None, "{damaged}");
            assert_eq!(store.get("auth_token").unwrap(), None, "{damaged}");
        }
    }

    #[test_log::test]
    fn removing_from_a_truncated_document_rewrites_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"user": "{\"id\":"#).unwrap();

        let store = FileStore::new(&path);
        store.remove("auth_token").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&text).unwrap();
        assert!(entries.is_empty());
    }

    #[test_log::test]
    fn writing_over_a_truncated_document_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{\"user\": ").unwrap();

        let store = FileStore::new(&path);
        store.set("auth_token", "fresh").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn writes_leave_no_staging_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        store.set("user", "{}").unwrap();
        store.set("auth_token", "t").unwrap();
        store.remove("user").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["session.json"]);
    }
}
