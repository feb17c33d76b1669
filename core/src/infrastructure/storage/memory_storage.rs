use std::{collections::HashMap, sync::RwLock};

use crate::domain::{common::entities::app_errors::CoreError, saved_item::ports::KeyValueStorage};

/// Process-local storage, used for ephemeral runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let values = self
            .values
            .read()
            .map_err(|_| CoreError::PersistenceError("storage lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| CoreError::PersistenceError("storage lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
