//! Product review routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use demart_core::ProductId;

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::Review;
use crate::services::review::ReviewService;
use crate::state::AppState;

/// Request body for POST /api/reviews/create.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: i64,
    pub review: String,
}

/// POST /api/reviews/create
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>)> {
    let reviews = ReviewService::new(state.pool());

    let review = reviews
        .create_review(user.id, ProductId::new(request.product_id), &request.review)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(review)))
}

/// GET /api/reviews/product/{product_id}
pub async fn for_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<Review>>> {
    let reviews = ReviewService::new(state.pool());
    let list = reviews.product_reviews(ProductId::new(product_id)).await?;
    Ok(Json(list))
}
