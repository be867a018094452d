//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Local storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the persisted cart and the order records
    #[arg(long, env = "SHOPVIBE_STORAGE_DIR", default_value = ".shopvibe")]
    pub storage_dir: PathBuf,
}

impl StorageConfig {
    /// Directory for the cart key-value store.
    #[must_use]
    pub fn cart_dir(&self) -> PathBuf {
        self.storage_dir.join("cart")
    }

    /// Directory for order records.
    #[must_use]
    pub fn records_dir(&self) -> PathBuf {
        self.storage_dir.join("records")
    }
}
