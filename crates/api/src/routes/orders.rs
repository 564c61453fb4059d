//! Customer order routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use demart_core::OrderId;

use crate::db::users::NewAddress;
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::Order;
use crate::services::order::OrderService;
use crate::state::AppState;

/// Request body for POST /api/orders: the shipping address.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub mobile: Option<String>,
}

/// POST /api/orders
///
/// Checks out the current cart into a new `PENDING` order.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<Order>> {
    let orders = OrderService::new(state.pool());

    let order = orders
        .create_order(
            user.id,
            NewAddress {
                first_name: &request.first_name,
                last_name: &request.last_name,
                street_address: &request.street_address,
                city: &request.city,
                state: &request.state,
                zip_code: &request.zip_code,
                mobile: request.mobile.as_deref(),
            },
        )
        .await?;

    tracing::info!(order_id = %order.id, user_id = %user.id, "order created");

    Ok(Json(order))
}

/// GET /api/orders/user
pub async fn history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<(StatusCode, Json<Vec<Order>>)> {
    let orders = OrderService::new(state.pool());
    let history = orders.user_order_history(user.id).await?;
    Ok((StatusCode::ACCEPTED, Json(history)))
}

/// GET /api/orders/{id}
pub async fn by_id(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Order>)> {
    let orders = OrderService::new(state.pool());
    let order = orders.find_order_by_id(OrderId::new(id)).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}
