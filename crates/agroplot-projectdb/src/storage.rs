//! Key/value substrate the project store persists into.
//!
//! Values are strings keyed by strings, the same shape a browser's local
//! storage offers. Two backends are provided:
//!
//! - [`MemoryStorage`]: in-process map, optionally bounded by a byte quota
//! - [`FileStorage`]: one file per key in a directory
//!
//! File writes go to a temporary sibling first and are renamed into place,
//! so a failed write leaves the previous value intact.

use agroplot_core::{thread_safe_rw_map, ThreadSafeRwMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// String key/value store
///
/// Implementations must be thread-safe; the auto-save task writes from a
/// tokio worker while the UI thread reads.
pub trait KeyValueStorage: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory substrate for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: ThreadSafeRwMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the total of `key.len() + value.len()` over all entries
    pub fn with_quota(quota: usize) -> Self {
        Self {
            data: thread_safe_rw_map(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.write();

        if let Some(quota) = self.quota {
            let used: usize = data
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);
            if needed > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.data.write().remove(key);
        Ok(())
    }
}

/// Directory-backed substrate, one `<key>.json` file per key
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the storage directory; it must already exist for writes
    /// to succeed
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Open the platform data directory (e.g. `~/.local/share/agroplot`),
    /// creating it if needed
    pub fn open_default() -> StorageResult<Self> {
        let dir = Self::default_dir().ok_or_else(|| {
            StorageError::Unavailable("no data directory on this platform".to_string())
        })?;
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir))
    }

    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("agroplot"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Unavailable(format!(
                "invalid storage key '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn name(&self) -> &str {
        "FileStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        let write = || -> io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::from(e)
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
