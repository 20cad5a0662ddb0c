// src/cache/storage.rs
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write side of a string key-value store. Values are JSON text.
pub trait SetStorage: Send + Sync {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read side of a string key-value store
pub trait GetStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Both sides, for adapters that read back what they write
pub trait KeyValueStorage: GetStorage + SetStorage {}

impl<T: GetStorage + SetStorage> KeyValueStorage for T {}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SetStorage for MemoryStorage {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

impl GetStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// Persistent store kept as a single JSON object on disk.
///
/// Each operation reads the whole file and rewrites it; a missing file is
/// an empty store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;

        // Replace the file in one step so a crash never leaves half a document
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, raw)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SetStorage for FileStorage {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

impl GetStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(self.read_entries()?.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("account").unwrap(), None);

        storage.set("account", r#"{"accessToken":"t"}"#).unwrap();
        assert_eq!(
            storage.get("account").unwrap().as_deref(),
            Some(r#"{"accessToken":"t"}"#)
        );

        storage.remove("account").unwrap();
        assert_eq!(storage.get("account").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("store.json"));
        assert_eq!(storage.get("account").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        FileStorage::new(&path).set("account", "\"value\"").unwrap();
        FileStorage::new(&path).set("theme", "\"dark\"").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("account").unwrap().as_deref(), Some("\"value\""));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("store.json"));
        storage.set("account", "1").unwrap();
        storage.set("other", "2").unwrap();

        storage.remove("account").unwrap();

        assert_eq!(storage.get("account").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        // left behind by an interrupted write
        fs::write(dir.path().join("store.json.tmp"), "{\"acc").unwrap();

        let storage = FileStorage::new(&path);
        storage.set("account", "1").unwrap();
        storage.set("account", "2").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["store.json".to_string()]);

        let raw = fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("account").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_file_storage_reports_corruption() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let result = FileStorage::new(&path).get("account");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
