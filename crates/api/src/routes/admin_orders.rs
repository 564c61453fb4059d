//! Admin order management routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use demart_core::OrderId;

use super::ApiMessage;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::Order;
use crate::services::order::OrderService;
use crate::state::AppState;

/// GET /api/admin/orders
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<(StatusCode, Json<Vec<Order>>)> {
    let orders = OrderService::new(state.pool());
    let all = orders.all_orders().await?;
    Ok((StatusCode::ACCEPTED, Json(all)))
}

/// PUT /api/admin/orders/{id}/placed
///
/// Placing an order also marks its payment completed.
pub async fn placed(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.placed_order(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// PUT /api/admin/orders/{id}/confirmed
pub async fn confirmed(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.confirmed_order(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// PUT /api/admin/orders/{id}/ship
pub async fn ship(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.shipped_order(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// PUT /api/admin/orders/{id}/deliver
pub async fn deliver(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.delivered_order(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// PUT /api/admin/orders/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.cancelled_order(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// DELETE /api/admin/orders/{id}
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<ApiMessage>)> {
    let orders = OrderService::new(state.pool());

    orders.delete_order(OrderId::new(id)).await?;

    tracing::info!(order_id = id, "order deleted");

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiMessage::new("Order Deleted Successfully")),
    ))
}
