use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// String key-value storage with local-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Read and deserialize a JSON value stored under `key`.
pub fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` to JSON and store it under `key`.
pub fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store persisted as one JSON object in a file.
///
/// The file is read once on open and rewritten in full after every change.
/// A missing file is an empty store; parent directories are created on the
/// first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!(
            "Opened session store {} ({} keys)",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_json_helpers() {
        let mut store = MemoryStore::new();
        write_json(&mut store, "list", &vec![1, 2, 3]).unwrap();
        let list: Option<Vec<u32>> = read_json(&store, "list").unwrap();
        assert_eq!(list, Some(vec![1, 2, 3]));
        let missing: Option<Vec<u32>> = read_json(&store, "other").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_read_json_rejects_garbage() {
        let mut store = MemoryStore::new();
        store.set("list", "not json").unwrap();
        assert!(read_json::<_, Vec<u32>>(&store, "list").is_err());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("artistly_user", "{}").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("artistly_user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_empty_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_mut_ref_is_a_store() {
        fn put<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }

        let mut inner = MemoryStore::new();
        put(&mut inner);
        assert_eq!(inner.get("k").unwrap().as_deref(), Some("v"));
    }
}
