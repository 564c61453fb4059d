//! Order service: checkout and the order lifecycle.
//!
//! An order is a frozen snapshot of the cart at checkout time. Totals and
//! per-line prices are copied from the cart and never recomputed, so later
//! catalog price changes do not affect existing orders. The cart itself is
//! left untouched by checkout.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use demart_core::{OrderId, OrderStatus, PaymentStatus, UserId};

use super::cart::{CartError, CartService};
use crate::db::orders::{NewOrder, NewOrderItem};
use crate::db::users::{NewAddress, UserRepository};
use crate::db::{OrderRepository, RepositoryError};
use crate::models::Order;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the given ID.
    #[error("order not exist with id {0}")]
    OrderNotFound(OrderId),

    /// The cart snapshot could not be taken.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
    users: UserRepository<'a>,
    cart: CartService<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            users: UserRepository::new(pool),
            cart: CartService::new(pool),
        }
    }

    /// Create an order from the user's current cart.
    ///
    /// Persists the shipping address under the user, snapshots every cart
    /// item and the cart's aggregates into the order, and assigns a fresh
    /// opaque order reference. The new order starts `PENDING`/`PENDING`.
    pub async fn create_order(
        &self,
        user_id: UserId,
        shipping_address: NewAddress<'_>,
    ) -> Result<Order, OrderError> {
        let address = self.users.create_address(user_id, shipping_address).await?;
        let cart = self.cart.find_user_cart(user_id).await?;

        let items = cart
            .items
            .iter()
            .map(|item| NewOrderItem {
                product_id: item.product_id,
                size: item.size.clone(),
                quantity: item.quantity,
                price: item.price,
                discounted_price: item.discounted_price,
            })
            .collect();

        let order = self
            .orders
            .create(NewOrder {
                order_ref: Uuid::new_v4().to_string(),
                user_id,
                shipping_address_id: address.id,
                totals: cart.totals(),
                items,
            })
            .await?;

        Ok(order)
    }

    /// Mark an order as placed, which also completes its payment.
    pub async fn placed_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .update_status_and_payment(id, OrderStatus::Placed, PaymentStatus::Completed)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }

    /// Mark an order as confirmed.
    pub async fn confirmed_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.set_status(id, OrderStatus::Confirmed).await
    }

    /// Mark an order as shipped.
    pub async fn shipped_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.set_status(id, OrderStatus::Shipped).await
    }

    /// Mark an order as delivered.
    pub async fn delivered_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.set_status(id, OrderStatus::Delivered).await
    }

    /// Cancel an order.
    pub async fn cancelled_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.set_status(id, OrderStatus::Cancelled).await
    }

    /// Look up an order by ID, items included.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` if the order does not exist.
    pub async fn find_order_by_id(&self, id: OrderId) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .get_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))?;

        order.items = self.orders.items(order.id).await?;
        Ok(order)
    }

    /// A user's order history, newest first, items included.
    pub async fn user_order_history(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.orders.by_user(user_id).await?;
        for order in &mut orders {
            order.items = self.orders.items(order.id).await?;
        }
        Ok(orders)
    }

    /// Every order in the store, newest first, without items.
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.list_all().await?)
    }

    /// Delete an order and its line items.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` if the order does not exist.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        if self.orders.delete(id).await? {
            Ok(())
        } else {
            Err(OrderError::OrderNotFound(id))
        }
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.orders
            .update_status(id, status)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_not_found_message() {
        let err = OrderError::OrderNotFound(OrderId::new(5));
        assert_eq!(err.to_string(), "order not exist with id 5");
    }
}
