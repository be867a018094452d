//! File-backed record store.
//!
//! Each collection is a JSON-lines file inside a directory: `orders.jsonl` and
//! `orderitems.jsonl`. Records are appended and never rewritten.

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::debug;

use crate::domain::orders::{
    errors::RecordStoreError,
    models::{NewOrder, NewOrderItem, Order, OrderItem, OrderUuid},
    store::RecordStore,
};

const ORDERS_FILE: &str = "orders.jsonl";
const ORDER_ITEMS_FILE: &str = "orderitems.jsonl";

#[derive(Debug)]
pub struct FileRecordStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileRecordStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, RecordStoreError> {
        let contents = match fs::read_to_string(self.dir.join(file)).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(RecordStoreError::from))
            .collect()
    }

    async fn append<T: Serialize>(&self, file: &str, record: &T) -> Result<(), RecordStoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(file);
        let mut handle = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        handle.write_all(line.as_bytes()).await?;
        handle.flush().await?;

        debug!(path = %path.display(), "appended record");

        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn create_order(&self, order: NewOrder) -> Result<Order, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let existing: Vec<Order> = self.read_all(ORDERS_FILE).await?;

        if existing.iter().any(|stored| stored.uuid == order.uuid) {
            return Err(RecordStoreError::AlreadyExists);
        }

        let order = order.into_record(Timestamp::now());
        self.append(ORDERS_FILE, &order).await?;

        Ok(order)
    }

    async fn create_order_item(&self, item: NewOrderItem) -> Result<OrderItem, RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let orders: Vec<Order> = self.read_all(ORDERS_FILE).await?;

        if !orders.iter().any(|order| order.uuid == item.order_uuid) {
            return Err(RecordStoreError::InvalidReference);
        }

        let items: Vec<OrderItem> = self.read_all(ORDER_ITEMS_FILE).await?;

        if items.iter().any(|existing| existing.uuid == item.uuid) {
            return Err(RecordStoreError::AlreadyExists);
        }

        let item = item.into_record(Timestamp::now());
        self.append(ORDER_ITEMS_FILE, &item).await?;

        Ok(item)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RecordStoreError> {
        self.read_all(ORDERS_FILE).await
    }

    async fn list_order_items(&self, order: OrderUuid) -> Result<Vec<OrderItem>, RecordStoreError> {
        let items: Vec<OrderItem> = self.read_all(ORDER_ITEMS_FILE).await?;

        Ok(items
            .into_iter()
            .filter(|item| item.order_uuid == order)
            .collect())
    }
}
