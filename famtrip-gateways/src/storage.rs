//! Device storage backed by a directory of JSON files.

use std::{io, path::Path};

use jfs::Store;

use famtrip_core::gateways::{storage::KeyValueStorage, Error, Result};

/// Stores every value in a separate file named after its key.
#[derive(Clone)]
pub struct JsonFileStorage {
    store: Store,
}

impl std::fmt::Debug for JsonFileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStorage")
            .field("path", &self.path())
            .finish()
    }
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let store = Store::new(directory)?;
        Ok(Self { store })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

fn storage_error(err: io::Error) -> Error {
    Error::Other(anyhow::Error::new(err).context("Device storage failed"))
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.store.get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        log::debug!("Storing '{key}' in {}", self.path().display());
        self.store
            .save_with_id(&value.to_owned(), key)
            .map(|_| ())
            .map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self.store.delete(key) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(storage_error(err)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::try_new(dir.path()).unwrap();
        assert_eq!(None, storage.get("language").unwrap());
        storage.set("language", "cs").unwrap();
        storage.set("currency", "CZK").unwrap();
        assert_eq!(Some("cs".to_owned()), storage.get("language").unwrap());
        storage.set("language", "en").unwrap();
        assert_eq!(Some("en".to_owned()), storage.get("language").unwrap());
        storage.remove("language").unwrap();
        storage.remove("language").unwrap();
        assert_eq!(None, storage.get("language").unwrap());
        assert_eq!(Some("CZK".to_owned()), storage.get("currency").unwrap());
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        JsonFileStorage::try_new(dir.path())
            .unwrap()
            .set("currency", "GBP")
            .unwrap();
        let storage = JsonFileStorage::try_new(dir.path()).unwrap();
        assert_eq!(Some("GBP".to_owned()), storage.get("currency").unwrap());
    }
}
