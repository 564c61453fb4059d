//! Catalog service: category resolution and the product query surface.

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use demart_core::ProductId;

use crate::db::products::{NewProduct, ProductFilter, ProductPage, ProductUpdate};
use crate::db::{CategoryRepository, ProductRepository, RepositoryError};
use crate::models::{Category, Product};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given ID.
    #[error("product not found with id {0}")]
    ProductNotFound(ProductId),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A product to create, addressed by its three category names.
#[derive(Debug)]
pub struct CreateProduct {
    pub top_level_category: String,
    pub second_level_category: String,
    pub third_level_category: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub color: String,
    pub price: Decimal,
    pub discounted_price: Decimal,
    pub discount_percent: i32,
    pub quantity: i32,
    pub sizes: Vec<String>,
    pub image_url: String,
}

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
    categories: CategoryRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
            categories: CategoryRepository::new(pool),
        }
    }

    /// Resolve a (top, second, third) category-name triple to the leaf
    /// category, creating any missing level linked to its resolved parent.
    ///
    /// Idempotent: resolving the same triple twice yields the same leaf.
    pub async fn resolve_leaf_category(
        &self,
        top: &str,
        second: &str,
        third: &str,
    ) -> Result<Category, CatalogError> {
        let top_level = match self.categories.find_top_level(top).await? {
            Some(category) => category,
            None => self.categories.create(top, None, 1).await?,
        };

        let second_level = match self.categories.find_child(second, top_level.id).await? {
            Some(category) => category,
            None => self.categories.create(second, Some(top_level.id), 2).await?,
        };

        let third_level = match self.categories.find_child(third, second_level.id).await? {
            Some(category) => category,
            None => {
                self.categories
                    .create(third, Some(second_level.id), 3)
                    .await?
            }
        };

        Ok(third_level)
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if the product does not exist.
    pub async fn find_product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// All products in the catalog.
    pub async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.list_all().await?)
    }

    /// Products belonging to the named (leaf) category.
    pub async fn products_by_category(&self, name: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.by_category_name(name).await?)
    }

    /// Free-text search over title and description.
    pub async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.search(keyword).await?)
    }

    /// Filtered/paginated/sorted catalog query, delegated to storage.
    pub async fn filtered_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<ProductPage, CatalogError> {
        Ok(self.products.filtered(filter).await?)
    }

    /// Create a product under the leaf of the given category triple.
    pub async fn create_product(&self, request: CreateProduct) -> Result<Product, CatalogError> {
        let leaf = self
            .resolve_leaf_category(
                &request.top_level_category,
                &request.second_level_category,
                &request.third_level_category,
            )
            .await?;

        let product = self
            .products
            .create(NewProduct {
                title: &request.title,
                description: &request.description,
                brand: &request.brand,
                color: &request.color,
                price: request.price,
                discounted_price: request.discounted_price,
                discount_percent: request.discount_percent,
                quantity: request.quantity,
                sizes: &request.sizes,
                image_url: &request.image_url,
                category_id: leaf.id,
            })
            .await?;

        Ok(product)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if the product does not exist.
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate<'_>,
    ) -> Result<Product, CatalogError> {
        self.products
            .update(id, update)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if the product does not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        if self.products.delete(id).await? {
            Ok(())
        } else {
            Err(CatalogError::ProductNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_not_found_message() {
        let err = CatalogError::ProductNotFound(ProductId::new(1));
        assert_eq!(err.to_string(), "product not found with id 1");
    }
}
