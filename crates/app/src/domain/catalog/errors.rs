//! Catalog errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("invalid price for product {product}: {price}")]
    InvalidPrice { product: String, price: String },

    #[error("unknown currency code for product {product}: {currency}")]
    UnknownCurrency { product: String, currency: String },

    #[error("product not found: {0}")]
    ProductNotFound(String),
}
