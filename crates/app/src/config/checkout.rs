//! Checkout Config

use std::path::PathBuf;

use clap::Args;
use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::domain::checkout::summary::CheckoutPricing;

/// Catalog and pricing settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// YAML product catalog
    #[arg(long, env = "SHOPVIBE_CATALOG", default_value = "fixtures/products/demo.yml")]
    pub catalog: PathBuf,

    /// Orders with a subtotal above this ship free
    #[arg(long, env = "SHOPVIBE_FREE_SHIPPING_THRESHOLD", default_value = "1000")]
    pub free_shipping_threshold: Decimal,

    /// Shipping charged at or below the free shipping threshold
    #[arg(long, env = "SHOPVIBE_FLAT_SHIPPING_FEE", default_value = "50")]
    pub flat_shipping_fee: Decimal,

    /// Tax rate as a fraction (0.18 is 18%)
    #[arg(long, env = "SHOPVIBE_TAX_RATE", default_value = "0.18")]
    pub tax_rate: Decimal,
}

impl CheckoutConfig {
    /// Pricing for the checkout service.
    #[must_use]
    pub fn pricing(&self) -> CheckoutPricing {
        CheckoutPricing {
            free_shipping_threshold: self.free_shipping_threshold,
            flat_shipping_fee: self.flat_shipping_fee,
            tax_rate: Percentage::from(self.tax_rate),
        }
    }
}
