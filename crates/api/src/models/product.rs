//! Product and category domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use demart_core::{CategoryId, ProductId};

/// A node in the three-level category tree.
///
/// Level 1 nodes have no parent; a level-N node (N > 1) always references a
/// level-(N-1) parent. Products may only reference level-3 (leaf) nodes.
/// The tree is stored as parent-ID references, not live object links.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub parent_category_id: Option<CategoryId>,
    /// Depth in the tree, 1 through 3.
    pub level: i32,
}

/// A catalog product, referencing a leaf category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub color: String,
    /// Unit price before discount.
    pub price: Decimal,
    /// Unit price after discount.
    pub discounted_price: Decimal,
    pub discount_percent: i32,
    /// Units in stock.
    pub quantity: i32,
    /// Available sizes, e.g. `["S", "M", "L"]`.
    pub sizes: Vec<String>,
    pub image_url: String,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
}
