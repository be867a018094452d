//! Checkout service.

use std::{fmt, sync::Arc};

use jiff::Timestamp;
use shopvibe::{cart::Cart, persistence::CartPersistence};
use tracing::{info, warn};

use crate::domain::{
    checkout::{
        errors::CheckoutError,
        shipping::{STANDARD_SHIPPING, ShippingDetails},
        summary::{CheckoutPricing, OrderSummary},
    },
    orders::{
        history::GUEST_USER_ID,
        models::{NewOrder, NewOrderItem, Order, OrderItem, OrderItemUuid, OrderStatus, OrderUuid},
        store::RecordStore,
    },
};

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub summary: OrderSummary,
}

#[derive(Clone)]
pub struct CheckoutService {
    records: Arc<dyn RecordStore>,
    pricing: CheckoutPricing,
}

impl fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutService")
            .field("records", &"<RecordStore>")
            .field("pricing", &self.pricing)
            .finish()
    }
}

impl CheckoutService {
    #[must_use]
    pub fn new(records: Arc<dyn RecordStore>, pricing: CheckoutPricing) -> Self {
        Self { records, pricing }
    }

    /// Pricing applied to orders.
    pub fn pricing(&self) -> &CheckoutPricing {
        &self.pricing
    }

    /// Totals the cart would be charged right now.
    pub fn summarize<P: CartPersistence>(&self, cart: &Cart<P>) -> OrderSummary {
        OrderSummary::from_cart(cart.state(), &self.pricing)
    }

    /// Place an order for everything in the cart.
    ///
    /// The order record is written first, then one item record per cart line, one at a time.
    /// The cart is cleared only after every write succeeded. Nothing is rolled back when an item
    /// write fails: the order and any items already written stay in the store.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::MissingShippingDetail`]: a required shipping field is blank.
    /// - [`CheckoutError::CreateOrder`]: the order record could not be written.
    /// - [`CheckoutError::CreateOrderItem`]: an item record could not be written.
    pub async fn place_order<P: CartPersistence>(
        &self,
        cart: &mut Cart<P>,
        shipping: &ShippingDetails,
        member_email: Option<&str>,
    ) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        shipping.validate()?;

        let summary = self.summarize(cart);
        let now = Timestamp::now();

        let order = self
            .records
            .create_order(NewOrder {
                uuid: OrderUuid::now_v7(),
                order_number: format!("ORD-{}", now.as_millisecond()),
                order_date: now,
                total_amount: summary.total,
                order_status: OrderStatus::Pending,
                shipping_address: shipping.formatted_address(),
                shipping_method: STANDARD_SHIPPING.to_string(),
                item_count: summary.item_count,
                user_id: member_email.unwrap_or(GUEST_USER_ID).to_string(),
            })
            .await
            .map_err(CheckoutError::CreateOrder)?;

        let mut items = Vec::with_capacity(cart.lines().len());

        for line in cart.lines() {
            let unit_price = line.unit_price_or_zero();

            let item = self
                .records
                .create_order_item(NewOrderItem {
                    uuid: OrderItemUuid::now_v7(),
                    order_uuid: order.uuid,
                    product_name: line.name.clone(),
                    product_sku: line.sku.clone(),
                    product_image: line.image.clone(),
                    product_description: line.description.clone(),
                    quantity: line.quantity,
                    unit_price,
                    line_item_total: line.line_total(),
                })
                .await
                .map_err(|source| {
                    warn!(
                        order_number = %order.order_number,
                        written = items.len(),
                        "order item write failed; order left without all of its items"
                    );

                    CheckoutError::CreateOrderItem {
                        order: order.uuid,
                        source,
                    }
                })?;

            items.push(item);
        }

        cart.clear_cart();

        info!(
            order_number = %order.order_number,
            items = items.len(),
            total = %summary.total,
            "order placed"
        );

        Ok(PlacedOrder {
            order,
            items,
            summary,
        })
    }
}
