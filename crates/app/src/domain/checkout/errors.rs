//! Checkout errors.

use thiserror::Error;

use crate::domain::orders::{RecordStoreError, models::OrderUuid};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("missing shipping detail: {0}")]
    MissingShippingDetail(&'static str),

    #[error("failed to create order: {0}")]
    CreateOrder(#[source] RecordStoreError),

    /// The order record exists but one of its items could not be written. Items written before
    /// the failure are kept.
    #[error("failed to create items for order {order}: {source}")]
    CreateOrderItem {
        order: OrderUuid,

        #[source]
        source: RecordStoreError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_store_cause_is_part_of_the_message() {
        let cause = || RecordStoreError::Unavailable("disk full".to_string());

        let order = CheckoutError::CreateOrder(cause()).to_string();
        let item = CheckoutError::CreateOrderItem {
            order: OrderUuid::now_v7(),
            source: cause(),
        }
        .to_string();

        assert!(order.contains("disk full"), "cause missing from {order:?}");
        assert!(item.contains("disk full"), "cause missing from {item:?}");
    }
}
