//! User profile routes.

use axum::{Json, http::StatusCode};

use crate::middleware::CurrentUser;
use crate::models::User;

/// GET /api/users/profile
pub async fn profile(CurrentUser(user): CurrentUser) -> (StatusCode, Json<User>) {
    (StatusCode::ACCEPTED, Json(user))
}
