//! Integration tests for DeMart.
//!
//! These tests run against a live API server and database:
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p demart-cli -- migrate
//!
//! # Bootstrap the admin account the admin-surface tests sign in with
//! cargo run -p demart-cli -- create-admin \
//!     --email admin@demart.test --password admin-integration-pw
//!
//! # Start the API server
//! cargo run -p demart-api
//!
//! # Run the tests
//! cargo test -p demart-integration-tests -- --ignored
//! ```
//!
//! The server location defaults to `http://localhost:3000` and can be
//! overridden with `DEMART_BASE_URL`; the admin credentials with
//! `DEMART_ADMIN_EMAIL` / `DEMART_ADMIN_PASSWORD`.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("DEMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A fresh HTTP client.
#[must_use]
pub fn client() -> Client {
    Client::new()
}

/// A random email that won't collide across test runs.
#[must_use]
pub fn random_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Sign up a fresh user and return (email, jwt).
pub async fn signup(client: &Client) -> (String, String) {
    let email = random_email();
    let resp = client
        .post(format!("{}/auth/signup", base_url()))
        .json(&json!({
            "email": email,
            "password": "integration-test-pw",
            "first_name": "Test",
            "last_name": "User",
        }))
        .send()
        .await
        .expect("signup request failed");

    assert!(resp.status().is_success(), "signup failed: {}", resp.status());

    let body: Value = resp.json().await.expect("signup response not JSON");
    let jwt = body["jwt"].as_str().expect("signup response missing jwt");
    (email, jwt.to_string())
}

/// Sign in as the bootstrap admin account and return its JWT.
///
/// The account must already exist; create it with `demart-cli create-admin`
/// (see the crate docs for the matching credentials).
pub async fn admin_jwt(client: &Client) -> String {
    let email = std::env::var("DEMART_ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@demart.test".to_string());
    let password = std::env::var("DEMART_ADMIN_PASSWORD")
        .unwrap_or_else(|_| "admin-integration-pw".to_string());

    let resp = client
        .post(format!("{}/auth/signin", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("admin signin request failed");

    assert!(
        resp.status().is_success(),
        "admin signin failed: {} (run `demart-cli create-admin` first)",
        resp.status()
    );

    let body: Value = resp.json().await.expect("signin response not JSON");
    body["jwt"]
        .as_str()
        .expect("signin response missing jwt")
        .to_string()
}

/// Create a catalog product through the admin API and return it as JSON.
pub async fn create_product(
    client: &Client,
    admin_jwt: &str,
    title: &str,
    categories: (&str, &str, &str),
) -> Value {
    let resp = client
        .post(format!("{}/api/admin/products", base_url()))
        .bearer_auth(admin_jwt)
        .json(&json!({
            "top_level_category": categories.0,
            "second_level_category": categories.1,
            "third_level_category": categories.2,
            "title": title,
            "description": "Integration test product",
            "brand": "TestBrand",
            "color": "green",
            "price": "40.00",
            "discounted_price": "30.00",
            "discount_percent": 25,
            "quantity": 10,
            "sizes": ["M", "L"],
            "image_url": "https://example.com/images/test-product.jpg",
        }))
        .send()
        .await
        .expect("product create request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("product response not JSON")
}
