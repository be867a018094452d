//! Orders
//!
//! Order and order item records, and the [`RecordStore`] they are written to.

pub mod errors;
pub mod file;
pub mod history;
pub mod memory;
pub mod models;
pub mod store;

pub use errors::RecordStoreError;
pub use store::*;
