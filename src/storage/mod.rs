//! Key-value persistence primitive.
//!
//! The journal keeps all of its state behind a tiny get/set/remove interface so
//! the entry model never touches the filesystem directly. Two backends exist:
//!
//! - `FileStore`: a JSON object on disk, guarded by an advisory lock
//! - `MemoryStore`: an in-process map for tests and embedders

use crate::constants;
use crate::errors::{AppError, AppResult, StorageError};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Replaces the value under `key` with `apply(current)` as one step.
    ///
    /// Backends shared between processes override this to hold their lock
    /// from the read through the write.
    fn update<F>(&mut self, key: &str, apply: F) -> AppResult<()>
    where
        F: FnOnce(Option<&str>) -> AppResult<String>,
    {
        let current = self.get(key)?;
        let value = apply(current.as_deref())?;
        self.set(key, &value)
    }
}

/// In-memory store.
///
/// ```
/// use moodlog::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object mapping keys to string values.
///
/// Every operation takes an exclusive lock on a sibling lock file for the
/// duration of its read-modify-write, and writes go through a temp file that
/// is persisted over the store so a crash never leaves half a document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileStore {
    /// Opens the store inside `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AppError::Config` if `data_dir` is not absolute
    /// - `AppError::Io` if the directory cannot be created or secured
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        if !data_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory path must be absolute: {}",
                data_dir.display()
            )));
        }

        ensure_data_directory_exists(data_dir)?;

        Ok(Self {
            path: data_dir.join(constants::STORE_FILE_NAME),
            lock_path: data_dir.join(constants::STORE_LOCK_FILE_NAME),
        })
    }

    /// Path of the JSON document backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> AppResult<File> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|source| StorageError::Lock {
                path: self.lock_path.clone(),
                source,
            })?;
        file.lock_exclusive().map_err(|source| StorageError::Lock {
            path: self.lock_path.clone(),
            source,
        })?;
        Ok(file)
    }

    fn read_document(&self) -> AppResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(
                    "Store document at {:?} is malformed, treating it as empty: {}",
                    self.path, e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> AppResult<()> {
        let encoded = serde_json::to_string_pretty(document).map_err(StorageError::Serialize)?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(encoded.as_bytes())?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(constants::DEFAULT_FILE_PERMISSIONS);
            temp.as_file().set_permissions(permissions)?;
        }

        temp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        debug!("Wrote store document with {} keys", document.len());
        Ok(())
    }

    fn unlock(&self, lock: &File) {
        if let Err(e) = FileExt::unlock(lock) {
            debug!("Releasing {:?} failed, the lock goes with the handle: {}", self.lock_path, e);
        }
    }

    fn transact<F>(&mut self, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> AppResult<()>,
    {
        let lock = self.lock()?;
        let result = self.read_document().and_then(|mut document| {
            apply(&mut document)?;
            self.write_document(&document)
        });
        self.unlock(&lock);
        result
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let lock = self.lock()?;
        let document = self.read_document();
        self.unlock(&lock);
        Ok(document?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        debug!("Setting store key {}", key);
        self.transact(|document| {
            document.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        debug!("Removing store key {}", key);
        self.transact(|document| {
            document.remove(key);
            Ok(())
        })
    }

    fn update<F>(&mut self, key: &str, apply: F) -> AppResult<()>
    where
        F: FnOnce(Option<&str>) -> AppResult<String>,
    {
        debug!("Updating store key {}", key);
        self.transact(|document| {
            let value = apply(document.get(key).map(String::as_str))?;
            document.insert(key.to_string(), value);
            Ok(())
        })
    }
}

/// Ensures the data directory exists, creating it with owner-only permissions.
///
/// # Errors
///
/// Returns `AppError::Io` if the directory creation fails due to permission issues,
/// invalid paths, or other filesystem errors.
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if data_dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(data_dir).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create data directory: {}", e),
        ))
    })?;

    #[cfg(unix)]
    {
        let permissions = fs::Permissions::from_mode(constants::DEFAULT_DIR_PERMISSIONS);
        fs::set_permissions(data_dir, permissions).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to set secure permissions on data directory: {}", e),
            ))
        })?;
        debug!("Set 0o700 permissions on data directory");
    }

    Ok(())
}
