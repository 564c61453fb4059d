//! Order and order-item repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use demart_core::{AddressId, OrderId, OrderStatus, PaymentStatus, ProductId, Totals, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

const ORDER_COLUMNS: &str = "id, order_ref, user_id, shipping_address_id, order_date, \
     delivery_date, total_price, total_discounted_price, discount, total_items, \
     order_status, payment_status, created_at";

const ORDER_ITEM_COLUMNS: &str =
    "id, order_id, product_id, user_id, size, quantity, price, discounted_price";

/// A line item snapshot to persist under a new order.
#[derive(Debug)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub size: String,
    pub quantity: i32,
    pub price: Decimal,
    pub discounted_price: Decimal,
}

/// Everything needed to persist an order and its items atomically.
#[derive(Debug)]
pub struct NewOrder {
    pub order_ref: String,
    pub user_id: UserId,
    pub shipping_address_id: AddressId,
    pub totals: Totals,
    pub items: Vec<NewOrderItem>,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order and its line items in one transaction.
    ///
    /// The returned order carries its items. Status starts as
    /// `Pending`/`Pending` per the order lifecycle.
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let mut order = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders
                 (order_ref, user_id, shipping_address_id, total_price,
                  total_discounted_price, discount, total_items, order_status, payment_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(&new_order.order_ref)
        .bind(new_order.user_id)
        .bind(new_order.shipping_address_id)
        .bind(new_order.totals.total_price)
        .bind(new_order.totals.total_discounted_price)
        .bind(new_order.totals.discount)
        .bind(new_order.totals.total_items)
        .bind(OrderStatus::Pending)
        .bind(PaymentStatus::Pending)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(new_order.items.len());
        for item in &new_order.items {
            let saved = sqlx::query_as::<_, OrderItem>(&format!(
                "INSERT INTO order_items
                     (order_id, product_id, user_id, size, quantity, price, discounted_price)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING {ORDER_ITEM_COLUMNS}"
            ))
            .bind(order.id)
            .bind(item.product_id)
            .bind(new_order.user_id)
            .bind(&item.size)
            .bind(item.quantity)
            .bind(item.price)
            .bind(item.discounted_price)
            .fetch_one(&mut *tx)
            .await?;
            items.push(saved);
        }

        tx.commit().await?;

        order.items = items;
        Ok(order)
    }

    /// Get an order by its ID, without items.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// The line items of an order, in insertion order.
    pub async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(&format!(
            "SELECT {ORDER_ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY id"
        ))
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// All orders placed by a user, newest first, without items.
    pub async fn by_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// All orders in the store, newest first, without items.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Set the order status. Returns `None` if the order does not exist.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET order_status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Set both order and payment status in one write.
    pub async fn update_status_and_payment(
        &self,
        id: OrderId,
        status: OrderStatus,
        payment: PaymentStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET order_status = $2, payment_status = $3
             WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(payment)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Delete an order and its items. Returns `true` if a row was removed.
    pub async fn delete(&self, id: OrderId) -> Result<bool, RepositoryError> {
        // order_items rows go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
