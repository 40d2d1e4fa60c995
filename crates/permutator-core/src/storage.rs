//! Local key-value persistence.
//!
//! The last generated list is mirrored under [`GENERATED_EMAILS_KEY`] so it can
//! be restored on the next start.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::permutation::CandidateList;

/// Key holding the most recent candidate list as a JSON array of strings.
pub const GENERATED_EMAILS_KEY: &str = "generatedEmails";

/// File name of the store inside the data directory.
const STORE_FILE: &str = "storage.json";

/// A string-keyed store of JSON values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object in a single file.
///
/// The file is read on every access and rewritten on every change, so several
/// processes see each other's last write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store in the platform data directory
    /// (e.g. `~/.local/share/permutator/storage.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))?
            .join("permutator");
        Ok(Self::new(dir.join(STORE_FILE)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replaces the file atomically: the new contents go to a temporary file
    /// in the same directory, which is then renamed over the old one.
    fn write_all(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("Store written to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Loads and deserializes the value under `key`.
///
/// Returns `Ok(None)` when the key is missing.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the value has the wrong
/// shape.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    store
        .get(key)?
        .map(|value| serde_json::from_value::<T>(value).map_err(Error::from))
        .transpose()
}

/// Serializes `value` and stores it under `key`.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the store cannot be
/// written.
pub fn save<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    store.set(key, serde_json::to_value(value)?)
}

/// Loads the last generated list.
///
/// Returns `Ok(None)` when nothing has been stored yet.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the value is not an array
/// of strings.
pub fn load_candidates(store: &dyn KeyValueStore) -> Result<Option<CandidateList>> {
    load(store, GENERATED_EMAILS_KEY)
}

/// Stores `candidates` as the last generated list.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_candidates(store: &mut dyn KeyValueStore, candidates: &CandidateList) -> Result<()> {
    save(store, GENERATED_EMAILS_KEY, candidates)?;
    info!("Saved {} generated emails", candidates.len());
    Ok(())
}
