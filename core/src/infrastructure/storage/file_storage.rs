use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::domain::{common::entities::app_errors::CoreError, saved_item::ports::KeyValueStorage};

/// Stores each key as `<dir>/<key>.json`. Writes go through a temporary file
/// and a rename so a crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            error!("Failed to create data directory {}: {}", dir.display(), e);
            CoreError::PersistenceError(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        debug!(dir = %dir.display(), "File storage ready");

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(CoreError::InvalidInput(format!(
                "storage key must be alphanumeric, '-' or '_': {key:?}"
            )));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(CoreError::PersistenceError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value)
            .and_then(|_| fs::rename(&tmp_path, &path))
            .map_err(|e| {
                error!("Failed to write {}: {}", path.display(), e);
                CoreError::PersistenceError(format!("Failed to write {}: {}", path.display(), e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::saved_item::{
        entities::SavedItemType, services::SavedItemsStore, value_objects::SaveItemInput,
    };

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get_item("savedContent").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path()).unwrap();

        storage.set_item("savedContent", "[]").unwrap();

        assert_eq!(
            storage.get_item("savedContent").unwrap(),
            Some("[]".to_string())
        );
        assert!(dir.path().join("savedContent.json").exists());
        assert!(!dir.path().join("savedContent.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path()).unwrap();

        assert!(matches!(
            storage.set_item("../escape", "x"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            storage.get_item(""),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let storage = FileKeyValueStorage::new(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.dir(), nested.as_path());
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store =
            SavedItemsStore::with_default_key(FileKeyValueStorage::new(dir.path()).unwrap());
        store
            .append(SaveItemInput {
                content: "## Pickled Carrots\n1. Slice".to_string(),
                item_type: SavedItemType::Preservation,
            })
            .unwrap();

        let reopened =
            SavedItemsStore::with_default_key(FileKeyValueStorage::new(dir.path()).unwrap());
        let items = reopened.load();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Pickled Carrots");
        assert_eq!(items[0].item_type, Some(SavedItemType::Preservation));
    }
}
