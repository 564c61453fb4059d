//! Order and order-item domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use demart_core::{
    AddressId, OrderId, OrderItemId, OrderStatus, PaymentStatus, PricedLine, ProductId, UserId,
};

/// An order created from a cart snapshot.
///
/// Aggregate totals are copied from the cart at creation time and never
/// recomputed afterwards. Only `order_status` and `payment_status` mutate
/// once the order exists.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    /// Opaque order reference shown to customers.
    pub order_ref: String,
    pub user_id: UserId,
    pub shipping_address_id: AddressId,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_price: Decimal,
    pub total_discounted_price: Decimal,
    pub discount: Decimal,
    pub total_items: i32,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    /// Snapshotted line items, loaded separately.
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A price-snapshotted line item belonging to one order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub size: String,
    pub quantity: i32,
    pub price: Decimal,
    pub discounted_price: Decimal,
}

impl PricedLine for OrderItem {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn unit_discounted_price(&self) -> Decimal {
        self.discounted_price
    }
}
