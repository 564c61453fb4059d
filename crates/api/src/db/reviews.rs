//! Review repository.

use sqlx::PgPool;

use demart_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::Review;

const REVIEW_COLUMNS: &str = "id, user_id, product_id, body, created_at";

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a review linked to a user and product.
    pub async fn create(
        &self,
        user_id: UserId,
        product_id: ProductId,
        body: &str,
    ) -> Result<Review, RepositoryError> {
        let review = sqlx::query_as::<_, Review>(&format!(
            "INSERT INTO reviews (user_id, product_id, body)
             VALUES ($1, $2, $3)
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(user_id)
        .bind(product_id)
        .bind(body)
        .fetch_one(self.pool)
        .await?;

        Ok(review)
    }

    /// All reviews for a product, in insertion order. No pagination.
    pub async fn for_product(&self, product_id: ProductId) -> Result<Vec<Review>, RepositoryError> {
        let reviews = sqlx::query_as::<_, Review>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE product_id = $1 ORDER BY id"
        ))
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }
}
