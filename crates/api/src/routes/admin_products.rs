//! Admin product management routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use demart_core::ProductId;

use super::ApiMessage;
use crate::db::products::ProductUpdate;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::Product;
use crate::services::catalog::{CatalogService, CreateProduct};
use crate::state::AppState;

/// Request body for POST /api/admin/products.
///
/// The product is addressed by its three category names; missing levels of
/// the tree are created on the fly.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
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
    #[serde(default)]
    pub sizes: Vec<String>,
    pub image_url: String,
}

/// Request body for PUT /api/admin/products/{id}; absent fields are kept.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub price: Option<Decimal>,
    pub discounted_price: Option<Decimal>,
    pub discount_percent: Option<i32>,
    pub quantity: Option<i32>,
    pub image_url: Option<String>,
}

/// POST /api/admin/products
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let catalog = CatalogService::new(state.pool());

    let product = catalog
        .create_product(CreateProduct {
            top_level_category: request.top_level_category,
            second_level_category: request.second_level_category,
            third_level_category: request.third_level_category,
            title: request.title,
            description: request.description,
            brand: request.brand,
            color: request.color,
            price: request.price,
            discounted_price: request.discounted_price,
            discount_percent: request.discount_percent,
            quantity: request.quantity,
            sizes: request.sizes,
            image_url: request.image_url,
        })
        .await?;

    tracing::info!(product_id = %product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/admin/products/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let catalog = CatalogService::new(state.pool());

    let product = catalog
        .update_product(
            ProductId::new(id),
            ProductUpdate {
                title: request.title.as_deref(),
                description: request.description.as_deref(),
                brand: request.brand.as_deref(),
                color: request.color.as_deref(),
                price: request.price,
                discounted_price: request.discounted_price,
                discount_percent: request.discount_percent,
                quantity: request.quantity,
                image_url: request.image_url.as_deref(),
            },
        )
        .await?;

    Ok(Json(product))
}

/// DELETE /api/admin/products/{id}
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<ApiMessage>)> {
    let catalog = CatalogService::new(state.pool());

    catalog.delete_product(ProductId::new(id)).await?;

    tracing::info!(product_id = id, "product deleted");

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiMessage::new("Product deleted Successfully")),
    ))
}
