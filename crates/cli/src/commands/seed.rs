//! Catalog seeding command.
//!
//! Inserts a small sample catalog (category tree plus a handful of products)
//! for local development. Idempotent: existing rows are left alone via
//! `ON CONFLICT DO NOTHING` and name lookups.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{CommandError, connect};

struct SampleProduct {
    categories: (&'static str, &'static str, &'static str),
    title: &'static str,
    description: &'static str,
    brand: &'static str,
    color: &'static str,
    price: Decimal,
    discounted_price: Decimal,
    discount_percent: i32,
    quantity: i32,
    sizes: &'static [&'static str],
    image_url: &'static str,
}

fn sample_products() -> Vec<SampleProduct> {
    vec![
        SampleProduct {
            categories: ("men", "clothing", "mens_kurta"),
            title: "Classic Cotton Kurta",
            description: "Straight-cut cotton kurta with full sleeves.",
            brand: "Handloom Co",
            color: "white",
            price: Decimal::new(1999, 2),
            discounted_price: Decimal::new(1499, 2),
            discount_percent: 25,
            quantity: 50,
            sizes: &["S", "M", "L", "XL"],
            image_url: "https://example.com/images/kurta-white.jpg",
        },
        SampleProduct {
            categories: ("women", "clothing", "womens_dress"),
            title: "Floral Summer Dress",
            description: "Lightweight A-line dress with floral print.",
            brand: "Meadow",
            color: "blue",
            price: Decimal::new(3499, 2),
            discounted_price: Decimal::new(2799, 2),
            discount_percent: 20,
            quantity: 30,
            sizes: &["S", "M", "L"],
            image_url: "https://example.com/images/dress-blue.jpg",
        },
        SampleProduct {
            categories: ("men", "footwear", "mens_sneakers"),
            title: "Low-Top Canvas Sneakers",
            description: "Everyday canvas sneakers with rubber sole.",
            brand: "Stride",
            color: "black",
            price: Decimal::new(2599, 2),
            discounted_price: Decimal::new(2599, 2),
            discount_percent: 0,
            quantity: 0,
            sizes: &["8", "9", "10", "11"],
            image_url: "https://example.com/images/sneakers-black.jpg",
        },
    ]
}

/// Seed the catalog with sample data.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    for product in sample_products() {
        let (top, second, third) = product.categories;
        let leaf_id = ensure_category_path(&pool, top, second, third).await?;

        let sizes: Vec<String> = product.sizes.iter().map(|s| (*s).to_owned()).collect();
        sqlx::query(
            "INSERT INTO products
                 (title, description, brand, color, price, discounted_price,
                  discount_percent, quantity, sizes, image_url, category_id)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11
             WHERE NOT EXISTS (SELECT 1 FROM products WHERE title = $1)",
        )
        .bind(product.title)
        .bind(product.description)
        .bind(product.brand)
        .bind(product.color)
        .bind(product.price)
        .bind(product.discounted_price)
        .bind(product.discount_percent)
        .bind(product.quantity)
        .bind(&sizes)
        .bind(product.image_url)
        .bind(leaf_id)
        .execute(&pool)
        .await?;

        tracing::info!(title = product.title, "seeded product");
    }

    tracing::info!("Seeding complete");
    Ok(())
}

/// Find or create the three-level category path, returning the leaf ID.
async fn ensure_category_path(
    pool: &PgPool,
    top: &str,
    second: &str,
    third: &str,
) -> Result<i64, CommandError> {
    let top_id = ensure_category(pool, top, None, 1).await?;
    let second_id = ensure_category(pool, second, Some(top_id), 2).await?;
    ensure_category(pool, third, Some(second_id), 3).await
}

async fn ensure_category(
    pool: &PgPool,
    name: &str,
    parent: Option<i64>,
    level: i32,
) -> Result<i64, CommandError> {
    sqlx::query(
        "INSERT INTO categories (name, parent_category_id, level)
         VALUES ($1, $2, $3)
         ON CONFLICT (name, parent_category_id) DO NOTHING",
    )
    .bind(name)
    .bind(parent)
    .bind(level)
    .execute(pool)
    .await?;

    let id: i64 = sqlx::query_scalar(
        "SELECT id FROM categories
         WHERE name = $1 AND parent_category_id IS NOT DISTINCT FROM $2",
    )
    .bind(name)
    .bind(parent)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
