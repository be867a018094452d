//! Key-value storage
//!
//! A durable string store addressed by key, the way browser local storage is. Cart persistence
//! writes one entry per cart under a fixed name.

use std::io;

use thiserror::Error;

pub mod file;
pub mod memory;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used, for example because it is disabled or out of space.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing files failed.
    #[error("storage I/O error")]
    Io(#[from] io::Error),

    /// A key contains characters the backend cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A durable string store addressed by key.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
