//! In-memory key-value store.

use std::sync::{Arc, Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use crate::storage::{KeyValueStore, StorageError};

/// In-memory store.
///
/// Clones share the same entries, so a second cart built from a clone sees what the first one
/// saved. This is how a reload is simulated in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store was poisoned by a panicking writer.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }

    /// Check if the store has no keys.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store was poisoned by a panicking writer.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, FxHashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|poisoned| StorageError::Unavailable(poisoned.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_then_get_returns_value() -> TestResult {
        let mut store = MemoryStore::new();

        store.set_item("cart-storage", "{}")?;

        assert_eq!(store.get_item("cart-storage")?.as_deref(), Some("{}"));

        Ok(())
    }

    #[test]
    fn clones_share_entries() -> TestResult {
        let mut store = MemoryStore::new();
        let reader = store.clone();

        store.set_item("k", "v")?;

        assert_eq!(reader.get_item("k")?.as_deref(), Some("v"));
        assert_eq!(reader.len()?, 1);

        Ok(())
    }

    #[test]
    fn remove_missing_key_is_ignored() -> TestResult {
        let mut store = MemoryStore::new();

        store.remove_item("missing")?;

        assert!(store.is_empty()?);

        Ok(())
    }
}
