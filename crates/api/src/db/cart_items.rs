//! Cart-item repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use demart_core::{CartId, CartItemId, ProductId, UserId};

use super::RepositoryError;
use crate::models::CartItem;

const CART_ITEM_COLUMNS: &str =
    "id, cart_id, product_id, user_id, size, quantity, price, discounted_price";

/// A line item to insert, with its add-time price snapshot.
#[derive(Debug)]
pub struct NewCartItem<'a> {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub size: &'a str,
    pub quantity: i32,
    pub price: Decimal,
    pub discounted_price: Decimal,
}

/// Repository for cart-item database operations.
pub struct CartItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartItemRepository<'a> {
    /// Create a new cart-item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a cart item by its ID.
    pub async fn get_by_id(&self, id: CartItemId) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// All items currently in a cart, in insertion order.
    pub async fn items_for_cart(&self, cart_id: CartId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {CART_ITEM_COLUMNS} FROM cart_items WHERE cart_id = $1 ORDER BY id"
        ))
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Find the item for a given (cart, product, size) combination, if any.
    ///
    /// Used to bump the quantity instead of inserting a duplicate line.
    pub async fn find_existing(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        size: &str,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {CART_ITEM_COLUMNS} FROM cart_items
             WHERE cart_id = $1 AND product_id = $2 AND size = $3"
        ))
        .bind(cart_id)
        .bind(product_id)
        .bind(size)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Insert a new line item.
    pub async fn create(&self, new_item: NewCartItem<'_>) -> Result<CartItem, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(&format!(
            "INSERT INTO cart_items
                 (cart_id, product_id, user_id, size, quantity, price, discounted_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {CART_ITEM_COLUMNS}"
        ))
        .bind(new_item.cart_id)
        .bind(new_item.product_id)
        .bind(new_item.user_id)
        .bind(new_item.size)
        .bind(new_item.quantity)
        .bind(new_item.price)
        .bind(new_item.discounted_price)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Set the quantity of a line item; price snapshots are untouched.
    ///
    /// Returns `None` if the item does not exist.
    pub async fn update_quantity(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(&format!(
            "UPDATE cart_items SET quantity = $2 WHERE id = $1
             RETURNING {CART_ITEM_COLUMNS}"
        ))
        .bind(id)
        .bind(quantity)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Delete a line item. Returns `true` if a row was removed.
    pub async fn delete(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
