//! Cart Lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// One product and quantity entry in a cart.
///
/// Display fields are copied from the [`Product`] when the line is created and are not
/// re-fetched afterwards, so totals reflect the price at the time the product was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product the line refers to
    pub product_id: ProductId,

    /// Product name snapshot
    pub name: Option<String>,

    /// Product image snapshot
    pub image: Option<String>,

    /// Unit price snapshot
    pub unit_price: Option<Decimal>,

    /// Currency code snapshot
    pub currency: Option<String>,

    /// SKU snapshot
    pub sku: Option<String>,

    /// Short description snapshot
    pub description: Option<String>,

    /// Quantity, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Create a line from a product snapshot.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            currency: product.currency.clone(),
            sku: product.sku.clone(),
            description: product.short_description.clone(),
            quantity,
        }
    }

    /// Replace the snapshot fields with the given product's, keeping the quantity.
    pub fn refresh_snapshot(&mut self, product: &Product) {
        *self = Self::from_product(product, self.quantity);
    }

    /// Unit price, with a missing price counted as zero.
    pub fn unit_price_or_zero(&self) -> Decimal {
        self.unit_price.unwrap_or(Decimal::ZERO)
    }

    /// Unit price multiplied by quantity, saturating at the `Decimal` bounds.
    pub fn line_total(&self) -> Decimal {
        self.unit_price_or_zero()
            .saturating_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_product_copies_display_fields() {
        let mut product = Product::new("p1")
            .with_name("Mug")
            .with_price(Decimal::new(250, 0), "INR")
            .with_short_description("Ceramic");
        product.sku = Some("MUG-01".to_string());
        product.image = Some("https://img/mug.png".to_string());

        let line = CartLine::from_product(&product, 2);

        assert_eq!(line.product_id, ProductId::new("p1"));
        assert_eq!(line.name.as_deref(), Some("Mug"));
        assert_eq!(line.sku.as_deref(), Some("MUG-01"));
        assert_eq!(line.image.as_deref(), Some("https://img/mug.png"));
        assert_eq!(line.description.as_deref(), Some("Ceramic"));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn line_total_treats_missing_price_as_zero() {
        let line = CartLine::from_product(&Product::new("p1"), 7);

        assert_eq!(line.line_total(), Decimal::ZERO);
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let product = Product::new("p1").with_price(Decimal::new(1999, 2), "INR");
        let line = CartLine::from_product(&product, 3);

        assert_eq!(line.line_total(), Decimal::new(5997, 2));
    }

    #[test]
    fn line_total_saturates_on_huge_price() {
        let product = Product::new("p1").with_price(Decimal::MAX, "INR");
        let line = CartLine::from_product(&product, 2);

        assert_eq!(line.line_total(), Decimal::MAX);
    }
}
