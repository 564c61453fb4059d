//! Welcome route.

use axum::Json;

use super::ApiMessage;

/// GET /
pub async fn welcome() -> Json<ApiMessage> {
    Json(ApiMessage::new("Welcome To E-Commerce System"))
}
