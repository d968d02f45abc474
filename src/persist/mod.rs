//! Key/value persistence for saves and settings
//!
//! The simulation talks to a [`StateStore`] and never to the
//! filesystem directly, so tests run against [`MemStore`] and the
//! binary runs against [`FileStore`].

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::Result;

/// Key for the serialized pet state
pub const SAVE_KEY: &str = "tamagotchi-save";
/// Key for the wall-clock timestamp of the last save (epoch ms, decimal)
pub const LAST_SAVE_KEY: &str = "last-save-time";
/// Key for user settings
pub const SETTINGS_KEY: &str = "tamagotchi-settings";

/// Minimal byte-oriented store the simulation persists through
pub trait StateStore {
    /// Read a key. `Ok(None)` means the key has never been written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Deserialize a stored JSON value. A corrupt entry is logged and
/// treated as absent rather than propagated, so a bad save never
/// bricks the simulation.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Result<Option<T>> {
    let Some(bytes) = store.read(key)? else {
        return Ok(None);
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding corrupt stored value");
            Ok(None)
        }
    }
}

pub fn store_json<T: Serialize>(store: &mut dyn StateStore, key: &str, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    store.write(key, &bytes)
}

/// File-per-key store rooted at a data directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }
}

impl StateStore for MemStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_store_round_trip() {
        let mut store = MemStore::new();
        assert!(store.read("missing").unwrap().is_none());
        store.write("k", b"value").unwrap();
        assert_eq!(store.read("k").unwrap().unwrap(), b"value");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();
        assert!(store.read(SAVE_KEY).unwrap().is_none());
        store.write(SAVE_KEY, b"{\"stage\":\"egg\"}").unwrap();
        assert_eq!(store.read(SAVE_KEY).unwrap().unwrap(), b"{\"stage\":\"egg\"}");
    }

    #[test]
    fn test_corrupt_json_reads_as_absent() {
        let mut store = MemStore::new();
        store.write("k", b"not json at all").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "k").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_typed_round_trip() {
        let mut store = MemStore::new();
        store_json(&mut store, "k", &vec![1u32, 2, 3]).unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "k").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }
}
