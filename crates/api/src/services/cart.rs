//! Cart service: item mutations and aggregate-total maintenance.
//!
//! Every mutation of a cart's item set ends with a recomputation of the
//! cart's stored aggregates so they always equal the sum over the current
//! items.

use sqlx::PgPool;
use thiserror::Error;

use demart_core::{CartId, CartItemId, ProductId, Totals, UserId};

use super::catalog::CatalogError;
use crate::db::cart_items::NewCartItem;
use crate::db::{CartItemRepository, CartRepository, ProductRepository, RepositoryError};
use crate::models::{Cart, CartItem};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// No cart item with the given ID.
    #[error("cart item not found with id {0}")]
    CartItemNotFound(CartItemId),

    /// Tried to update an item in someone else's cart.
    #[error("you can't update another user's cart item")]
    UpdateNotOwner,

    /// Tried to remove an item from someone else's cart.
    #[error("you can't remove another user's cart item")]
    RemoveNotOwner,

    /// Product lookup failed while adding an item.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Add-to-cart input.
#[derive(Debug)]
pub struct AddToCart<'a> {
    pub product_id: ProductId,
    pub size: &'a str,
    pub quantity: i32,
}

/// Cart service.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
    items: CartItemRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            carts: CartRepository::new(pool),
            items: CartItemRepository::new(pool),
            products: ProductRepository::new(pool),
        }
    }

    /// The user's cart with its current items and fresh aggregates.
    ///
    /// Creates the cart lazily if the user does not have one yet (users
    /// registered through the normal flow always do).
    pub async fn find_user_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        let cart = self.ensure_cart(user_id).await?;
        self.load_and_refresh(cart).await
    }

    /// Add a product to the user's cart.
    ///
    /// If an item for the same (product, size) already exists in the cart its
    /// quantity is incremented; otherwise a new item is inserted with the
    /// product's current prices as its snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` (wrapped) if the product does
    /// not exist.
    pub async fn add_cart_item(
        &self,
        user_id: UserId,
        request: AddToCart<'_>,
    ) -> Result<CartItem, CartError> {
        let product = self
            .products
            .get_by_id(request.product_id)
            .await
            .map_err(CatalogError::from)?
            .ok_or(CatalogError::ProductNotFound(request.product_id))?;

        let cart = self.ensure_cart(user_id).await?;
        let quantity = request.quantity.max(1);

        let item = match self
            .items
            .find_existing(cart.id, product.id, request.size)
            .await?
        {
            Some(existing) => self
                .items
                .update_quantity(existing.id, existing.quantity + quantity)
                .await?
                .ok_or(CartError::CartItemNotFound(existing.id))?,
            None => {
                self.items
                    .create(NewCartItem {
                        cart_id: cart.id,
                        product_id: product.id,
                        user_id,
                        size: request.size,
                        quantity,
                        price: product.price,
                        discounted_price: product.discounted_price,
                    })
                    .await?
            }
        };

        self.refresh_totals(cart.id).await?;
        Ok(item)
    }

    /// Change the quantity of a cart item.
    ///
    /// Price snapshots are never touched; only the owner may update.
    pub async fn update_cart_item(
        &self,
        user_id: UserId,
        item_id: CartItemId,
        quantity: i32,
    ) -> Result<CartItem, CartError> {
        let item = self
            .items
            .get_by_id(item_id)
            .await?
            .ok_or(CartError::CartItemNotFound(item_id))?;

        if item.user_id != user_id {
            return Err(CartError::UpdateNotOwner);
        }

        let updated = self
            .items
            .update_quantity(item_id, quantity.max(1))
            .await?
            .ok_or(CartError::CartItemNotFound(item_id))?;

        self.refresh_totals(updated.cart_id).await?;
        Ok(updated)
    }

    /// Remove an item from the user's cart.
    pub async fn remove_cart_item(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<(), CartError> {
        let item = self
            .items
            .get_by_id(item_id)
            .await?
            .ok_or(CartError::CartItemNotFound(item_id))?;

        if item.user_id != user_id {
            return Err(CartError::RemoveNotOwner);
        }

        self.items.delete(item_id).await?;
        self.refresh_totals(item.cart_id).await?;
        Ok(())
    }

    /// Get the user's cart row, creating it if absent.
    async fn ensure_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        match self.carts.find_by_user(user_id).await? {
            Some(cart) => Ok(cart),
            None => Ok(self.carts.create(user_id).await?),
        }
    }

    /// Load the cart's items, recompute the aggregates, and persist them.
    async fn load_and_refresh(&self, mut cart: Cart) -> Result<Cart, CartError> {
        cart.items = self.items.items_for_cart(cart.id).await?;

        let totals = Totals::compute(&cart.items);
        if cart.totals() != totals {
            self.carts.update_totals(cart.id, &totals).await?;
            cart.total_items = totals.total_items;
            cart.total_price = totals.total_price;
            cart.total_discounted_price = totals.total_discounted_price;
            cart.discount = totals.discount;
        }

        Ok(cart)
    }

    /// Recompute and store a cart's aggregates from its current items.
    async fn refresh_totals(&self, cart_id: CartId) -> Result<(), CartError> {
        let items = self.items.items_for_cart(cart_id).await?;
        let totals = Totals::compute(&items);
        self.carts.update_totals(cart_id, &totals).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_not_found_message() {
        let err = CartError::CartItemNotFound(CartItemId::new(9));
        assert_eq!(err.to_string(), "cart item not found with id 9");
    }
}
