//! Money

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    Findable,
    iso::{self, Currency},
};

/// Currency assumed when a product does not carry one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Resolve an ISO 4217 code, falling back to [`DEFAULT_CURRENCY`] when none is given.
pub fn resolve_currency(code: Option<&str>) -> Option<&'static Currency> {
    Currency::find(code.unwrap_or(DEFAULT_CURRENCY).trim())
}

/// Format an amount for display with two decimal places.
///
/// Rupee amounts are suffixed with `Rs`; anything else is shown as the bare amount.
pub fn format_price(amount: Decimal, currency: Option<&str>) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    match resolve_currency(currency) {
        Some(currency) if currency == iso::INR => format!("{rounded:.2} Rs"),
        _ => format!("{rounded:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_get_suffix() {
        assert_eq!(format_price(Decimal::new(24995, 1), Some("INR")), "2499.50 Rs");
    }

    #[test]
    fn missing_currency_defaults_to_rupees() {
        assert_eq!(format_price(Decimal::from(50), None), "50.00 Rs");
    }

    #[test]
    fn other_currencies_show_bare_amount() {
        assert_eq!(format_price(Decimal::new(1999, 2), Some("USD")), "19.99");
    }

    #[test]
    fn unknown_currency_shows_bare_amount() {
        assert_eq!(format_price(Decimal::new(5, 0), Some("XYZ1")), "5.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price(Decimal::new(10005, 3), Some("USD")), "10.01");
    }
}
