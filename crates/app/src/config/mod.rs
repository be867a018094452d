//! Application configuration
//!
//! Settings come from command line flags, then environment variables (a `.env` file is loaded
//! first), then defaults.

use clap::Args;

use crate::config::{checkout::CheckoutConfig, logging::LoggingConfig, storage::StorageConfig};

pub mod checkout;
pub mod logging;
pub mod storage;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Where carts and orders are kept.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog and checkout pricing settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}
