//! Cart and cart-item domain types.

use rust_decimal::Decimal;
use serde::Serialize;

use demart_core::{CartId, CartItemId, PricedLine, ProductId, Totals, UserId};

/// A user's shopping cart with stored aggregate totals.
///
/// The aggregates are derived from the current cart items and recomputed
/// after every item mutation; they must always equal
/// [`Totals::compute`] over `items`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub total_price: Decimal,
    pub total_discounted_price: Decimal,
    pub discount: Decimal,
    pub total_items: i32,
    /// Current line items, loaded separately.
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// The aggregate totals currently stored on this cart.
    #[must_use]
    pub const fn totals(&self) -> Totals {
        Totals {
            total_items: self.total_items,
            total_price: self.total_price,
            total_discounted_price: self.total_discounted_price,
            discount: self.discount,
        }
    }
}

/// A quantity of one product in a cart, at an add-time price snapshot.
///
/// `price` and `discounted_price` are copies of the product's prices when
/// the item was added; quantity updates do not re-read the live product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    /// Owner of the cart; checked on item update/removal.
    pub user_id: UserId,
    pub size: String,
    pub quantity: i32,
    /// Unit price snapshot.
    pub price: Decimal,
    /// Unit discounted-price snapshot.
    pub discounted_price: Decimal,
}

impl PricedLine for CartItem {
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
