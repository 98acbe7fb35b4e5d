//! Key/value preference storage.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

/// Failures reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// The file or its directory could not be read or written.
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file exists but does not hold a string map.
    #[error("preferences file {path} is not a JSON object of strings: {message}")]
    Corrupt {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// String key/value storage.
pub trait PreferenceStore: Send + Sync {
    /// Stored value for `key`.
    ///
    /// # Errors
    /// Backend-specific storage failures.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    /// Backend-specific storage failures.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Forget `key`.
    ///
    /// # Errors
    /// Backend-specific storage failures.
    fn remove(&self, key: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        (**self).remove(key)
    }
}

fn lock(entries: &Mutex<BTreeMap<String, String>>) -> MutexGuard<'_, BTreeMap<String, String>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Session-scoped preferences that vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        lock(&self.entries).insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

/// Local preferences kept in a JSON object inside one directory.
///
/// Writes go to a sibling temporary file that is renamed over the original,
/// so readers never observe a partial document.
pub struct JsonFilePreferenceStore {
    dir: Dir,
    dir_path: PathBuf,
    file_name: String,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Open `file_name` inside `dir`, starting empty when it does not exist.
    ///
    /// # Errors
    /// [`PreferenceError::Io`] when the directory or file cannot be read and
    /// [`PreferenceError::Corrupt`] when the file is not a JSON object of
    /// strings.
    pub fn open(
        dir: impl AsRef<Path>,
        file_name: impl Into<String>,
    ) -> Result<Self, PreferenceError> {
        let dir_path = dir.as_ref().to_path_buf();
        let file_name = file_name.into();
        let handle = Dir::open_ambient_dir(&dir_path, ambient_authority()).map_err(|source| {
            PreferenceError::Io {
                path: dir_path.clone(),
                source,
            }
        })?;

        let entries = match handle.read_to_string(&file_name) {
            Ok(text) => serde_json::from_str(&text).map_err(|err| PreferenceError::Corrupt {
                path: dir_path.join(&file_name),
                message: err.to_string(),
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: dir_path.join(&file_name),
                    source,
                });
            }
        };
        debug!(
            path = %dir_path.join(&file_name).display(),
            keys = entries.len(),
            "preferences loaded"
        );

        Ok(Self {
            dir: handle,
            dir_path,
            file_name,
            entries: Mutex::new(entries),
        })
    }

    /// Full path of the backing file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir_path.join(&self.file_name)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let io_error = |source: io::Error| PreferenceError::Io {
            path: self.path(),
            source,
        };
        let body = serde_json::to_vec_pretty(entries).map_err(|err| io_error(err.into()))?;
        let temporary = format!("{}.tmp", self.file_name);
        self.dir.write(&temporary, body).map_err(io_error)?;
        self.dir
            .rename(&temporary, &self.dir, &self.file_name)
            .map_err(io_error)
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = lock(&self.entries);
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let mut entries = lock(&self.entries);
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
