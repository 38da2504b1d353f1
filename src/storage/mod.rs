use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// JSON file-backed key-value store for session-like state (alerts, demo
/// holdings). One flat object per file; values are arbitrary JSON. The
/// pricing core never touches this; persisted records are deserialized
/// before they reach it.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| Error::StorageError(format!("corrupt store {}: {}", self.path.display(), e)))
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        let raw = serde_json::to_string_pretty(map)
            .map_err(|e| Error::StorageError(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let map = self.read_map()?;
        match map.get(key) {
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::StorageError(format!("bad value under {}: {}", key, e))),
            None => Ok(None),
        }
    }

    /// Missing key, missing file or an unreadable value all yield the
    /// default, matching a UI that starts from empty state rather than
    /// refusing to load.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("store read failed for {}: {}", key, e);
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut map = self.read_map()?;
        let json = serde_json::to_value(value).map_err(|e| Error::StorageError(e.to_string()))?;
        map.insert(key.to_string(), json);
        self.write_map(&map)
    }

    /// Returns whether the key existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.read_map()?;
        let existed = map.remove(key).is_some();
        if existed {
            self.write_map(&map)?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let (_dir, store) = temp_store();
        store.set("holdings", &vec![1.5, 2.5]).unwrap();
        let loaded: Vec<f64> = store.get("holdings").unwrap().unwrap();
        assert_eq!(loaded, vec![1.5, 2.5]);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let (_dir, store) = temp_store();
        let value: Vec<String> = store.get_or("absent", Vec::new());
        assert!(value.is_empty());
        assert!(store.get::<Vec<String>>("absent").unwrap().is_none());
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = temp_store();
        store.set("user", &"geum").unwrap();
        assert!(store.remove("user").unwrap());
        assert!(!store.remove("user").unwrap());
        assert!(store.get::<String>("user").unwrap().is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let (_dir, store) = temp_store();
        store.set("a", &1).unwrap();
        store.set("b", &2).unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get_or("b", 0), 2);
    }

    #[test]
    fn test_corrupt_file_falls_back_on_get_or() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = Store::open(&path);
        assert_eq!(store.get_or("anything", 7), 7);
        assert!(store.get::<i32>("anything").is_err());
    }
}
