//! Cart and cart item routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use demart_core::{CartItemId, ProductId};

use super::ApiMessage;
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::{Cart, CartItem};
use crate::services::cart::{AddToCart, CartService};
use crate::state::AppState;

/// Request body for PUT /api/cart/add.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: i64,
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Request body for PUT /api/cart_items/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i32,
}

/// GET /api/cart
pub async fn get_cart(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Cart>> {
    let carts = CartService::new(state.pool());
    let cart = carts.find_user_cart(user.id).await?;
    Ok(Json(cart))
}

/// PUT /api/cart/add
pub async fn add_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<ApiMessage>> {
    let carts = CartService::new(state.pool());

    carts
        .add_cart_item(
            user.id,
            AddToCart {
                product_id: ProductId::new(request.product_id),
                size: &request.size,
                quantity: request.quantity,
            },
        )
        .await?;

    Ok(Json(ApiMessage::new("Item Added To Cart Successfully")))
}

/// PUT /api/cart_items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<(StatusCode, Json<CartItem>)> {
    let carts = CartService::new(state.pool());

    let item = carts
        .update_cart_item(user.id, CartItemId::new(id), request.quantity)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(item)))
}

/// DELETE /api/cart_items/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<ApiMessage>)> {
    let carts = CartService::new(state.pool());

    carts.remove_cart_item(user.id, CartItemId::new(id)).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiMessage::new("Item Removed From Cart")),
    ))
}
