//! Catalog
//!
//! Product listing, filtering and sorting over an in-memory product list.

pub mod errors;
pub mod fixtures;
pub mod query;

pub use errors::CatalogError;
pub use query::*;
