//! Order summary.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use shopvibe::{cart::CartState, money::DEFAULT_CURRENCY};

/// Prices applied on top of the cart subtotal at checkout.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutPricing {
    /// Orders with a subtotal strictly above this ship free.
    pub free_shipping_threshold: Decimal,

    /// Shipping charged at or below the threshold.
    pub flat_shipping_fee: Decimal,

    /// Tax charged on the subtotal.
    pub tax_rate: Percentage,
}

impl Default for CheckoutPricing {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::from(1000),
            flat_shipping_fee: Decimal::from(50),
            tax_rate: Percentage::from(Decimal::new(18, 2)),
        }
    }
}

/// Totals shown on the checkout page and stored on the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub item_count: u64,
    pub currency: String,
}

impl OrderSummary {
    /// Compute the totals for a cart.
    ///
    /// The subtotal uses each line's price snapshot. Tax is rounded to two decimal places.
    /// Amounts saturate at the `Decimal` bounds.
    pub fn from_cart(state: &CartState, pricing: &CheckoutPricing) -> Self {
        let subtotal = state.total_price();

        let shipping = if subtotal > pricing.free_shipping_threshold {
            Decimal::ZERO
        } else {
            pricing.flat_shipping_fee
        };

        let tax = (pricing.tax_rate * Decimal::ONE)
            .saturating_mul(subtotal)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let currency = state
            .lines
            .first()
            .and_then(|line| line.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
            item_count: state.total_items(),
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use shopvibe::{cart::MergePolicy, products::Product};

    use super::*;

    fn cart_with(price: i64, quantity: u32) -> CartState {
        let mut state = CartState::default();
        state.add_item(
            &Product::new("p").with_price(Decimal::from(price), "INR"),
            quantity,
            MergePolicy::default(),
        );
        state
    }

    #[test]
    fn small_orders_pay_flat_shipping() {
        let summary = OrderSummary::from_cart(&cart_with(100, 3), &CheckoutPricing::default());

        assert_eq!(summary.subtotal, Decimal::from(300));
        assert_eq!(summary.shipping, Decimal::from(50));
        assert_eq!(summary.tax, Decimal::from(54));
        assert_eq!(summary.total, Decimal::from(404));
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.currency, "INR");
    }

    #[test]
    fn threshold_itself_still_pays_shipping() {
        let summary = OrderSummary::from_cart(&cart_with(1000, 1), &CheckoutPricing::default());

        assert_eq!(summary.shipping, Decimal::from(50));
    }

    #[test]
    fn orders_above_threshold_ship_free() {
        let summary = OrderSummary::from_cart(&cart_with(1001, 1), &CheckoutPricing::default());

        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.tax, Decimal::new(18018, 2));
        assert_eq!(summary.total, Decimal::new(118118, 2));
    }

    #[test]
    fn huge_subtotal_saturates_totals() {
        let mut state = CartState::default();
        state.add_item(
            &Product::new("p").with_price(Decimal::MAX, "INR"),
            3,
            MergePolicy::default(),
        );

        let summary = OrderSummary::from_cart(&state, &CheckoutPricing::default());

        assert_eq!(summary.subtotal, Decimal::MAX);
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::MAX);
    }

    #[test]
    fn empty_cart_defaults_currency() {
        let summary = OrderSummary::from_cart(&CartState::default(), &CheckoutPricing::default());

        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.currency, DEFAULT_CURRENCY);
    }
}
