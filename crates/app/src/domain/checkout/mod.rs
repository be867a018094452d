//! Checkout
//!
//! Turns a cart into an order record plus one item record per cart line.

pub mod errors;
pub mod service;
pub mod shipping;
pub mod summary;

pub use errors::CheckoutError;
pub use service::*;
