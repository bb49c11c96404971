//! Client-local preferences.
//!
//! The only thing the game remembers between launches is whether the
//! tutorial has been shown. Values live behind the [`KeyValueStore`]
//! trait so the terminal client can persist them to disk while tests use
//! an in-memory map.

use log::{debug, warn};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Key under which the tutorial flag is stored.
pub const TUTORIAL_SEEN_KEY: &str = "impostor.tutorialSeen";

/// File name used by [`FileStore::in_dir`].
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preferences I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("preferences file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object on disk, rewritten in full on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store preferences as [`PREFERENCES_FILE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PREFERENCES_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        debug!("saved {key} to {}", self.path.display());
        Ok(())
    }
}

/// Typed access to the stored preferences.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// A store that can't be read counts as "not seen" so the tutorial
    /// shows again rather than never.
    pub fn tutorial_seen(&self) -> bool {
        match self.store.get(TUTORIAL_SEEN_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(error) => {
                warn!("couldn't read preferences: {error}");
                false
            }
        }
    }

    pub fn mark_tutorial_seen(&mut self) -> Result<(), StorageError> {
        self.store.set(TUTORIAL_SEEN_KEY, "true")
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
