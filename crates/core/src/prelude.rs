//! ShopVibe prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, CartState, MergePolicy},
    money::{DEFAULT_CURRENCY, format_price},
    persistence::{
        CART_STORAGE_KEY, CartPersistence, Ephemeral, PersistError, PersistedCart,
        snapshot::{SNAPSHOT_VERSION, SnapshotError},
    },
    products::{Product, ProductId},
    storage::{KeyValueStore, StorageError, file::FileStore, memory::MemoryStore},
};
