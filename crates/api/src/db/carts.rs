//! Cart repository.

use sqlx::PgPool;

use demart_core::{CartId, Totals, UserId};

use super::RepositoryError;
use crate::models::Cart;

const CART_COLUMNS: &str =
    "id, user_id, total_price, total_discounted_price, discount, total_items";

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the cart owned by a user, if one exists.
    pub async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cart)
    }

    /// Create an empty cart for a user.
    pub async fn create(&self, user_id: UserId) -> Result<Cart, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>(&format!(
            "INSERT INTO carts (user_id) VALUES ($1) RETURNING {CART_COLUMNS}"
        ))
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(cart)
    }

    /// Overwrite the stored aggregate totals of a cart.
    pub async fn update_totals(
        &self,
        cart_id: CartId,
        totals: &Totals,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE carts SET
                 total_price = $2,
                 total_discounted_price = $3,
                 discount = $4,
                 total_items = $5
             WHERE id = $1",
        )
        .bind(cart_id)
        .bind(totals.total_price)
        .bind(totals.total_discounted_price)
        .bind(totals.discount)
        .bind(totals.total_items)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
