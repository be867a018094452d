//! Order history.

use std::cmp::Reverse;

use crate::domain::orders::{
    errors::RecordStoreError,
    models::{Order, OrderItem},
    store::RecordStore,
};

/// User id recorded for orders placed without signing in.
pub const GUEST_USER_ID: &str = "guest";

/// An order together with its items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Orders visible to `user_id`, newest first.
///
/// Guest orders are included for every user, as the storefront's profile page does.
///
/// # Errors
///
/// Returns a [`RecordStoreError`] if the store cannot be read.
pub async fn order_history(
    store: &dyn RecordStore,
    user_id: &str,
) -> Result<Vec<OrderWithItems>, RecordStoreError> {
    let mut orders: Vec<Order> = store
        .list_orders()
        .await?
        .into_iter()
        .filter(|order| order.user_id == user_id || order.user_id == GUEST_USER_ID)
        .collect();

    orders.sort_by_key(|order| Reverse(order.order_date));

    let mut history = Vec::with_capacity(orders.len());

    for order in orders {
        let items = store.list_order_items(order.uuid).await?;
        history.push(OrderWithItems { order, items });
    }

    Ok(history)
}
