use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::{StorageBackend, StorageConfig};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage contents are not valid JSON: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Synchronous string key-value store with browser local-storage semantics.
/// Any call may fail; callers decide how a failure surfaces.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// A JSON object on disk mapping keys to string values. Every call goes back
/// to the file so edits made by other processes are picked up.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

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

/// Process-local storage. Contents disappear with the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Wraps another backend and fails chosen operations on demand, leaving the
/// wrapped contents untouched. Lets callers exercise storage failure paths.
pub struct FaultyStorage<S = MemoryStorage> {
    inner: S,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_removes: AtomicBool,
}

impl<S: KeyValueStorage> FaultyStorage<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            fail_removes: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, operation: &str) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::Rejected(format!("{} failed", operation)));
        }
        Ok(())
    }
}

impl<S: KeyValueStorage> KeyValueStorage for FaultyStorage<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::check(&self.fail_reads, "get")?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_writes, "set")?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_removes, "remove")?;
        self.inner.remove(key)
    }
}

/// Builds the configured storage. `None` means the application runs without
/// persistence, the same as a browser with local storage switched off.
pub fn create_local_storage(config: &StorageConfig) -> Option<SharedStorage> {
    match config.backend {
        StorageBackend::Disabled => {
            log::warn!("Local storage disabled; hotels will not be saved");
            None
        }
        StorageBackend::Memory => {
            log::info!("Using in-memory storage");
            Some(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::File => {
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = fs::create_dir_all(parent) {
                    log::error!(
                        "Cannot create storage directory {}: {}; continuing without storage",
                        parent.display(),
                        e
                    );
                    return None;
                }
            }
            log::info!("Using file storage at {}", config.path.display());
            Some(Arc::new(FileStorage::new(&config.path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_get_set_remove() {
        let storage = MemoryStorage::with_entries([("lastUsedCurrency", "JPY")]);

        assert_eq!(storage.get("lastUsedCurrency").unwrap().as_deref(), Some("JPY"));
        storage.set("lastUsedCurrency", "EUR").unwrap();
        assert_eq!(storage.get("lastUsedCurrency").unwrap().as_deref(), Some("EUR"));
        storage.remove("lastUsedCurrency").unwrap();
        assert_eq!(storage.get("lastUsedCurrency").unwrap(), None);
        storage.remove("missing").unwrap();
    }

    #[test]
    fn faulty_storage_fails_only_selected_operations() {
        let storage = FaultyStorage::new(MemoryStorage::with_entries([("hotels", "[]")]));

        storage.fail_writes(true);
        assert!(matches!(storage.set("hotels", "[1]"), Err(StorageError::Rejected(_))));
        assert_eq!(storage.get("hotels").unwrap().as_deref(), Some("[]"));

        storage.fail_writes(false);
        storage.fail_reads(true);
        storage.set("hotels", "[1]").unwrap();
        assert!(storage.get("hotels").is_err());

        storage.fail_removes(true);
        assert!(storage.remove("hotels").is_err());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");

        let first = FileStorage::new(&path);
        assert_eq!(first.get("hotels").unwrap(), None);
        first.set("hotels", "[]").unwrap();
        first.set("calculationMode", "BALANCED").unwrap();

        let second = FileStorage::new(&path);
        assert_eq!(second.get("hotels").unwrap().as_deref(), Some("[]"));
        second.remove("hotels").unwrap();

        assert_eq!(first.get("hotels").unwrap(), None);
        assert_eq!(first.get("calculationMode").unwrap().as_deref(), Some("BALANCED"));
    }

    #[test]
    fn file_storage_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("hotels"), Err(StorageError::Encoding(_))));
        assert!(storage.set("hotels", "[]").is_err());
    }

    #[test]
    fn create_local_storage_honours_backend() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("store.json");

        let disabled = StorageConfig {
            backend: StorageBackend::Disabled,
            path: nested.clone(),
        };
        assert!(create_local_storage(&disabled).is_none());

        let file = StorageConfig {
            backend: StorageBackend::File,
            path: nested.clone(),
        };
        let storage = create_local_storage(&file).unwrap();
        storage.set("k", "v").unwrap();
        assert!(nested.exists());
    }
}
