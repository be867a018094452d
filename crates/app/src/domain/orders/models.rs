//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub order_date: Timestamp,
    pub total_amount: Decimal,
    pub order_status: OrderStatus,
    pub shipping_address: String,
    pub shipping_method: String,
    pub tracking_number: Option<String>,
    pub item_count: u64,
    pub user_id: String,
    pub created_at: Timestamp,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub order_date: Timestamp,
    pub total_amount: Decimal,
    pub order_status: OrderStatus,
    pub shipping_address: String,
    pub shipping_method: String,
    pub item_count: u64,
    pub user_id: String,
}

impl NewOrder {
    /// Turn the new order into a stored record.
    pub(crate) fn into_record(self, created_at: Timestamp) -> Order {
        Order {
            uuid: self.uuid,
            order_number: self.order_number,
            order_date: self.order_date,
            total_amount: self.total_amount,
            order_status: self.order_status,
            shipping_address: self.shipping_address,
            shipping_method: self.shipping_method,
            tracking_number: None,
            item_count: self.item_count,
            user_id: self.user_id,
            created_at,
        }
    }
}

/// OrderItem Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub product_image: Option<String>,
    pub product_description: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_item_total: Decimal,
    pub created_at: Timestamp,
}

/// New OrderItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub product_image: Option<String>,
    pub product_description: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_item_total: Decimal,
}

impl NewOrderItem {
    /// Turn the new item into a stored record.
    pub(crate) fn into_record(self, created_at: Timestamp) -> OrderItem {
        OrderItem {
            uuid: self.uuid,
            order_uuid: self.order_uuid,
            product_name: self.product_name,
            product_sku: self.product_sku,
            product_image: self.product_image,
            product_description: self.product_description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_item_total: self.line_item_total,
            created_at,
        }
    }
}
