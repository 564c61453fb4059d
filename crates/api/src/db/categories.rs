//! Category repository.
//!
//! The category tree is stored as rows with an optional parent ID, not as
//! live object references; resolution walks the levels top-down.

use sqlx::PgPool;

use demart_core::CategoryId;

use super::RepositoryError;
use crate::models::Category;

const CATEGORY_COLUMNS: &str = "id, name, parent_category_id, level";

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a top-level (level-1) category by exact name.
    pub async fn find_top_level(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories
             WHERE name = $1 AND parent_category_id IS NULL"
        ))
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Find a child category by exact name, scoped to its parent.
    pub async fn find_child(
        &self,
        name: &str,
        parent_id: CategoryId,
    ) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories
             WHERE name = $1 AND parent_category_id = $2"
        ))
        .bind(name)
        .bind(parent_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Insert a category at the given level, linked to its parent (if any).
    pub async fn create(
        &self,
        name: &str,
        parent_id: Option<CategoryId>,
        level: i32,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name, parent_category_id, level)
             VALUES ($1, $2, $3)
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name)
        .bind(parent_id)
        .bind(level)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}
