//! Record store.
//!
//! The write side of the hosted record service the storefront keeps orders in. Checkout creates
//! an order and then its items one at a time; nothing here is transactional.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::orders::{
    errors::RecordStoreError,
    models::{NewOrder, NewOrderItem, Order, OrderItem, OrderUuid},
};

#[automock]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, RecordStoreError>;

    /// Store a new item belonging to an existing order.
    async fn create_order_item(&self, item: NewOrderItem) -> Result<OrderItem, RecordStoreError>;

    /// Retrieve every stored order.
    async fn list_orders(&self) -> Result<Vec<Order>, RecordStoreError>;

    /// Retrieve the items of one order, in creation order.
    async fn list_order_items(&self, order: OrderUuid) -> Result<Vec<OrderItem>, RecordStoreError>;
}
