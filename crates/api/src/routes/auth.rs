//! Signup and signin routes.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::auth::{AuthService, Registration};
use crate::state::AppState;

/// Request body for POST /auth/signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: Option<String>,
}

/// Request body for POST /auth/signin.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a freshly issued token.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub message: String,
}

/// POST /auth/signup
///
/// Registers the account, creates its cart, and returns a bearer token.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(state.pool(), state.jwt());

    let (user, jwt) = auth
        .register(Registration {
            email: &request.email,
            password: &request.password,
            first_name: &request.first_name,
            last_name: &request.last_name,
            mobile: request.mobile.as_deref(),
        })
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(AuthResponse {
        jwt,
        message: "Register Success".to_string(),
    }))
}

/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<AuthResponse>> {
    let auth = AuthService::new(state.pool(), state.jwt());

    let (user, jwt) = auth.login(&request.email, &request.password).await?;

    tracing::info!(user_id = %user.id, "user signed in");

    Ok(Json(AuthResponse {
        jwt,
        message: "Login Success".to_string(),
    }))
}
