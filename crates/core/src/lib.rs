//! ShopVibe
//!
//! ShopVibe is the storefront cart engine: an owned cart store with derived totals, persisted
//! through a pluggable adapter so a cart survives restarts.

pub mod cart;
pub mod money;
pub mod persistence;
pub mod prelude;
pub mod products;
pub mod storage;
