//! Review domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use demart_core::{ProductId, ReviewId, UserId};

/// A free-text product review.
///
/// Immutable once created; never deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Free-text review body.
    pub body: String,
    pub created_at: DateTime<Utc>,
}
