//! Storefront application: catalog, checkout and order records on top of the `shopvibe` cart.

pub mod config;
pub mod domain;
pub mod observability;

mod uuids;
