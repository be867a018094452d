//! In-memory record store.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::domain::orders::{
    errors::RecordStoreError,
    models::{NewOrder, NewOrderItem, Order, OrderItem, OrderUuid},
    store::RecordStore,
};

#[derive(Debug, Default)]
struct Records {
    orders: Vec<Order>,
    items: Vec<OrderItem>,
}

/// Record store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Records>,
}

impl InMemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_order(&self, order: NewOrder) -> Result<Order, RecordStoreError> {
        let mut records = self.records.write().await;

        if records.orders.iter().any(|existing| existing.uuid == order.uuid) {
            return Err(RecordStoreError::AlreadyExists);
        }

        let order = order.into_record(Timestamp::now());
        records.orders.push(order.clone());

        Ok(order)
    }

    async fn create_order_item(&self, item: NewOrderItem) -> Result<OrderItem, RecordStoreError> {
        let mut records = self.records.write().await;

        if !records.orders.iter().any(|order| order.uuid == item.order_uuid) {
            return Err(RecordStoreError::InvalidReference);
        }

        if records.items.iter().any(|existing| existing.uuid == item.uuid) {
            return Err(RecordStoreError::AlreadyExists);
        }

        let item = item.into_record(Timestamp::now());
        records.items.push(item.clone());

        Ok(item)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RecordStoreError> {
        Ok(self.records.read().await.orders.clone())
    }

    async fn list_order_items(&self, order: OrderUuid) -> Result<Vec<OrderItem>, RecordStoreError> {
        Ok(self
            .records
            .read()
            .await
            .items
            .iter()
            .filter(|item| item.order_uuid == order)
            .cloned()
            .collect())
    }
}
