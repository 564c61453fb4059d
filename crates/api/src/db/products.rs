//! Product repository, including the filtered/paginated catalog query.

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use demart_core::{CategoryId, ProductId};

use super::RepositoryError;
use crate::models::Product;

const PRODUCT_COLUMNS: &str = "p.id, p.title, p.description, p.brand, p.color, p.price, \
     p.discounted_price, p.discount_percent, p.quantity, p.sizes, p.image_url, \
     p.category_id, p.created_at";

/// Fields required to insert a product row.
#[derive(Debug)]
pub struct NewProduct<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub brand: &'a str,
    pub color: &'a str,
    pub price: Decimal,
    pub discounted_price: Decimal,
    pub discount_percent: i32,
    pub quantity: i32,
    pub sizes: &'a [String],
    pub image_url: &'a str,
    pub category_id: CategoryId,
}

/// Partial product update; `None` fields keep their current value.
#[derive(Debug, Default)]
pub struct ProductUpdate<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub color: Option<&'a str>,
    pub price: Option<Decimal>,
    pub discounted_price: Option<Decimal>,
    pub discount_percent: Option<i32>,
    pub quantity: Option<i32>,
    pub image_url: Option<&'a str>,
}

/// Stock availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    InStock,
    OutOfStock,
}

/// Catalog sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    PriceLowToHigh,
    PriceHighToLow,
}

/// Filter parameters for the paginated catalog query.
///
/// Everything here is translated into a single SQL statement; there is no
/// in-process filtering.
#[derive(Debug, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub colors: Vec<String>,
    pub size: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_discount: Option<i32>,
    pub stock: Option<StockFilter>,
    pub sort: Option<ProductSort>,
    pub page_number: i64,
    pub page_size: i64,
}

/// One page of a filtered catalog query.
#[derive(Debug)]
pub struct ProductPage {
    pub content: Vec<Product>,
    pub total_elements: i64,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by its ID.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// All products, newest first.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p ORDER BY p.created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Products whose (leaf) category has the given name.
    pub async fn by_category_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p
             JOIN categories c ON c.id = p.category_id
             WHERE c.name = $1
             ORDER BY p.created_at DESC"
        ))
        .bind(name)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Keyword search over title and description, delegated to `ILIKE`.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, RepositoryError> {
        let pattern = format!("%{keyword}%");
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p
             WHERE p.title ILIKE $1 OR p.description ILIKE $1
             ORDER BY p.created_at DESC"
        ))
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Filtered, sorted, paginated catalog query.
    pub async fn filtered(&self, filter: &ProductFilter) -> Result<ProductPage, RepositoryError> {
        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products p"));
        push_filters(&mut query, filter);

        match filter.sort {
            Some(ProductSort::PriceLowToHigh) => {
                query.push(" ORDER BY p.discounted_price ASC");
            }
            Some(ProductSort::PriceHighToLow) => {
                query.push(" ORDER BY p.discounted_price DESC");
            }
            None => {
                query.push(" ORDER BY p.created_at DESC");
            }
        }

        let page_size = filter.page_size.max(1);
        let offset = filter.page_number.max(0) * page_size;
        query.push(" LIMIT ");
        query.push_bind(page_size);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let content = query
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products p");
        push_filters(&mut count, filter);
        let total_elements: i64 = count.build_query_scalar().fetch_one(self.pool).await?;

        Ok(ProductPage {
            content,
            total_elements,
        })
    }

    /// Insert a new product.
    pub async fn create(&self, new_product: NewProduct<'_>) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products
                 (title, description, brand, color, price, discounted_price,
                  discount_percent, quantity, sizes, image_url, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {PRODUCT_COLUMNS_FLAT}",
            PRODUCT_COLUMNS_FLAT = PRODUCT_COLUMNS.replace("p.", "")
        ))
        .bind(new_product.title)
        .bind(new_product.description)
        .bind(new_product.brand)
        .bind(new_product.color)
        .bind(new_product.price)
        .bind(new_product.discounted_price)
        .bind(new_product.discount_percent)
        .bind(new_product.quantity)
        .bind(new_product.sizes)
        .bind(new_product.image_url)
        .bind(new_product.category_id)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Apply a partial update; absent fields retain their current values.
    ///
    /// Returns `None` if the product does not exist.
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate<'_>,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET
                 title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 brand = COALESCE($4, brand),
                 color = COALESCE($5, color),
                 price = COALESCE($6, price),
                 discounted_price = COALESCE($7, discounted_price),
                 discount_percent = COALESCE($8, discount_percent),
                 quantity = COALESCE($9, quantity),
                 image_url = COALESCE($10, image_url)
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS_FLAT}",
            PRODUCT_COLUMNS_FLAT = PRODUCT_COLUMNS.replace("p.", "")
        ))
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.brand)
        .bind(update.color)
        .bind(update.price)
        .bind(update.discounted_price)
        .bind(update.discount_percent)
        .bind(update.quantity)
        .bind(update.image_url)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Append the WHERE clause shared by the page and count queries.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    query.push(" WHERE TRUE");

    if let Some(category) = &filter.category {
        query.push(" AND p.category_id IN (SELECT id FROM categories WHERE name = ");
        query.push_bind(category.clone());
        query.push(")");
    }
    if !filter.colors.is_empty() {
        query.push(" AND p.color = ANY(");
        query.push_bind(filter.colors.clone());
        query.push(")");
    }
    if let Some(size) = &filter.size {
        query.push(" AND ");
        query.push_bind(size.clone());
        query.push(" = ANY(p.sizes)");
    }
    if let Some(min_price) = filter.min_price {
        query.push(" AND p.discounted_price >= ");
        query.push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        query.push(" AND p.discounted_price <= ");
        query.push_bind(max_price);
    }
    if let Some(min_discount) = filter.min_discount {
        query.push(" AND p.discount_percent >= ");
        query.push_bind(min_discount);
    }
    match filter.stock {
        Some(StockFilter::InStock) => {
            query.push(" AND p.quantity > 0");
        }
        Some(StockFilter::OutOfStock) => {
            query.push(" AND p.quantity = 0");
        }
        None => {}
    }
}
