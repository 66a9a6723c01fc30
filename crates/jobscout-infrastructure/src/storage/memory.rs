//! In-memory storage for ephemeral sessions and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use jobscout_core::JobScoutError;
use jobscout_core::error::Result;

use super::durable::DurableStorage;

/// [`DurableStorage`] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| JobScoutError::storage(format!("Failed to lock storage: {}", e)))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| JobScoutError::storage(format!("Failed to lock storage: {}", e)))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| JobScoutError::storage(format!("Failed to lock storage: {}", e)))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_remove() {
        let storage = InMemoryStorage::new();
        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert!(storage.get_item("k").unwrap().is_none());
    }
}
