//! Cart persistence
//!
//! [`Cart`](crate::cart::Cart) saves its whole state after every mutation through a
//! [`CartPersistence`] adapter and restores it when constructed.

use thiserror::Error;

use crate::{
    cart::CartState,
    storage::{KeyValueStore, StorageError},
};

pub mod snapshot;

use snapshot::SnapshotError;

/// Storage key the cart snapshot is written under.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Errors raised while loading or saving a cart.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The key-value backend failed.
    #[error("cart storage failed")]
    Storage(#[from] StorageError),

    /// The stored snapshot could not be encoded or decoded.
    #[error("cart snapshot is invalid")]
    Snapshot(#[from] SnapshotError),
}

/// Loads and saves [`CartState`].
pub trait CartPersistence {
    /// Load the persisted state, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] if the backend fails or the stored snapshot is unusable.
    fn load(&self) -> Result<Option<CartState>, PersistError>;

    /// Persist the full state.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] if the state cannot be written.
    fn save(&mut self, state: &CartState) -> Result<(), PersistError>;
}

/// Persistence that keeps nothing; the cart lives only as long as the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeral;

impl CartPersistence for Ephemeral {
    fn load(&self) -> Result<Option<CartState>, PersistError> {
        Ok(None)
    }

    fn save(&mut self, _state: &CartState) -> Result<(), PersistError> {
        Ok(())
    }
}

/// Saves a versioned JSON snapshot of the cart under a named key in a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PersistedCart<K: KeyValueStore> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> PersistedCart<K> {
    /// Persist under [`CART_STORAGE_KEY`].
    pub fn new(store: K) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the snapshot is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Delete the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] if the backend fails.
    pub fn forget(&mut self) -> Result<(), PersistError> {
        self.store.remove_item(&self.key)?;
        Ok(())
    }
}

impl<K: KeyValueStore> CartPersistence for PersistedCart<K> {
    fn load(&self) -> Result<Option<CartState>, PersistError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };

        Ok(Some(snapshot::decode(&raw)?))
    }

    fn save(&mut self, state: &CartState) -> Result<(), PersistError> {
        let raw = snapshot::encode(state)?;
        self.store.set_item(&self.key, &raw)?;
        Ok(())
    }
}
