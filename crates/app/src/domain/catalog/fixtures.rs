//! Catalog Fixtures
//!
//! Products are read from YAML keyed by product id:
//!
//! ```yaml
//! products:
//!   wireless-headphones:
//!     name: Wireless Headphones
//!     price: "2999 INR"
//!     category: electronics
//!     featured: true
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use shopvibe::{money::resolve_currency, products::Product};
use tracing::debug;

use crate::domain::catalog::errors::CatalogError;

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Default, Deserialize)]
pub struct ProductFixture {
    pub name: Option<String>,

    /// Price with currency code (e.g., "2499 INR")
    pub price: Option<String>,

    pub image: Option<String>,
    pub sku: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub category: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

impl ProductFixture {
    fn into_product(self, id: String) -> Result<Product, CatalogError> {
        let (price, currency) = match self.price.as_deref() {
            Some(price) => {
                let (amount, code) = parse_price(&id, price)?;
                (Some(amount), Some(code))
            }
            None => (None, None),
        };

        Ok(Product {
            id: id.into(),
            name: self.name,
            image: self.image,
            price,
            currency,
            sku: self.sku,
            short_description: self.short_description,
            long_description: self.long_description,
            category: self.category,
            featured: self.featured,
        })
    }
}

/// Parse a price string (e.g., "49.99 INR") into an amount and a currency code.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not a
/// non-negative decimal, or if the currency code is not recognized.
pub fn parse_price(product: &str, price: &str) -> Result<(Decimal, String), CatalogError> {
    let invalid = || CatalogError::InvalidPrice {
        product: product.to_string(),
        price: price.to_string(),
    };

    let mut parts = price.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let amount = amount.parse::<Decimal>().map_err(|_err| invalid())?;

    if amount.is_sign_negative() {
        return Err(invalid());
    }

    let code = code.to_uppercase();

    if resolve_currency(Some(code.as_str())).is_none() {
        return Err(CatalogError::UnknownCurrency {
            product: product.to_string(),
            currency: code,
        });
    }

    Ok((amount, code))
}

/// Parse a YAML catalog. Products are returned ordered by id.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a product has an invalid price.
pub fn parse_catalog(yaml: &str) -> Result<Vec<Product>, CatalogError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let mut products = fixture
        .products
        .into_iter()
        .map(|(id, product)| product.into_product(id))
        .collect::<Result<Vec<_>, _>>()?;

    products.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(products)
}

/// Load a YAML catalog from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let products = parse_catalog(&std::fs::read_to_string(path)?)?;

    debug!(path = %path.display(), products = products.len(), "loaded catalog");

    Ok(products)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
products:
  watch:
    name: Smart Watch
    price: "4999.50 inr"
    category: electronics
    featured: true
  mug:
    name: Mug
"#;

    #[test]
    fn parses_products_sorted_by_id() -> TestResult {
        let products = parse_catalog(CATALOG)?;

        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["mug", "watch"]);

        let watch = products.last().ok_or("missing watch")?;
        assert_eq!(watch.price, Some(Decimal::new(499_950, 2)));
        assert_eq!(watch.currency.as_deref(), Some("INR"));
        assert!(watch.featured);

        let mug = products.first().ok_or("missing mug")?;
        assert_eq!(mug.price, None);
        assert!(!mug.featured);

        Ok(())
    }

    #[test]
    fn price_without_currency_is_invalid() {
        let result = parse_price("mug", "250");

        assert!(
            matches!(result, Err(CatalogError::InvalidPrice { .. })),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[test]
    fn negative_price_is_invalid() {
        let result = parse_price("mug", "-1 INR");

        assert!(
            matches!(result, Err(CatalogError::InvalidPrice { .. })),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[test]
    fn unknown_currency_is_reported() {
        let result = parse_price("mug", "10 XYZ");

        assert!(
            matches!(result, Err(CatalogError::UnknownCurrency { ref currency, .. }) if currency == "XYZ"),
            "expected UnknownCurrency, got {result:?}"
        );
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let result = parse_catalog("products: [");

        assert!(
            matches!(result, Err(CatalogError::Yaml(_))),
            "expected Yaml error, got {result:?}"
        );
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("catalog.yml");
        std::fs::write(&path, CATALOG)?;

        assert_eq!(load_catalog(&path)?.len(), 2);

        let missing = load_catalog(dir.path().join("missing.yml"));
        assert!(
            matches!(missing, Err(CatalogError::Io(_))),
            "expected Io error, got {missing:?}"
        );

        Ok(())
    }

    #[test]
    fn demo_catalog_loads() -> TestResult {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/products/demo.yml");
        let products = load_catalog(path)?;

        assert_eq!(products.len(), 7);
        assert!(products.iter().any(|p| p.featured));
        assert!(products.iter().any(|p| p.price.is_none()));

        Ok(())
    }
}
