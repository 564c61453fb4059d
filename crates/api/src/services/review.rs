//! Review service.

use sqlx::PgPool;
use thiserror::Error;

use demart_core::{ProductId, UserId};

use super::catalog::CatalogError;
use crate::db::{ProductRepository, RepositoryError, ReviewRepository};
use crate::models::Review;

/// Errors that can occur during review operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The reviewed product does not exist.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Review service.
pub struct ReviewService<'a> {
    reviews: ReviewRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> ReviewService<'a> {
    /// Create a new review service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            reviews: ReviewRepository::new(pool),
            products: ProductRepository::new(pool),
        }
    }

    /// Attach a review to a product.
    ///
    /// The product is resolved first so a review can never point at a
    /// product that does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` (wrapped) if the product does
    /// not exist.
    pub async fn create_review(
        &self,
        user_id: UserId,
        product_id: ProductId,
        body: &str,
    ) -> Result<Review, ReviewError> {
        let product = self
            .products
            .get_by_id(product_id)
            .await
            .map_err(CatalogError::from)?
            .ok_or(CatalogError::ProductNotFound(product_id))?;

        Ok(self.reviews.create(user_id, product.id, body).await?)
    }

    /// All reviews for a product, oldest first.
    pub async fn product_reviews(&self, product_id: ProductId) -> Result<Vec<Review>, ReviewError> {
        Ok(self.reviews.for_product(product_id).await?)
    }
}
