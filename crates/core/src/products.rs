//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, unique within a catalog and within a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Product
///
/// A product as shown to shoppers. Every field other than the id may be missing in catalog data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: Option<String>,

    /// Main image URL
    pub image: Option<String>,

    /// Unit price
    pub price: Option<Decimal>,

    /// ISO 4217 currency code of the price
    pub currency: Option<String>,

    /// Stock keeping unit
    pub sku: Option<String>,

    /// One line description
    pub short_description: Option<String>,

    /// Full description
    pub long_description: Option<String>,

    /// Category slug
    pub category: Option<String>,

    /// Whether the product is highlighted on the home page
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Create a product with only an id set.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the product name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the unit price and its currency.
    #[must_use]
    pub fn with_price(mut self, price: Decimal, currency: impl Into<String>) -> Self {
        self.price = Some(price);
        self.currency = Some(currency.into());
        self
    }

    /// Set the category slug.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the short description.
    #[must_use]
    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_id_serializes_as_plain_string() -> TestResult {
        let json = serde_json::to_string(&ProductId::new("sku-1"))?;

        assert_eq!(json, "\"sku-1\"");

        Ok(())
    }

    #[test]
    fn builder_sets_price_and_currency() {
        let product = Product::new("p1").with_price(Decimal::new(4999, 2), "INR");

        assert_eq!(product.price, Some(Decimal::new(4999, 2)));
        assert_eq!(product.currency.as_deref(), Some("INR"));
        assert!(product.name.is_none());
    }

    #[test]
    fn featured_defaults_to_false_when_missing() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"id":"p1"}"#)?;

        assert_eq!(product.id.as_str(), "p1");
        assert!(!product.featured);

        Ok(())
    }
}
