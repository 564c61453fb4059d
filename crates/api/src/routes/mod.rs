//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                   - Welcome message
//! GET  /health                             - Liveness check
//! GET  /health/ready                       - Readiness check (pings the database)
//!
//! # Auth
//! POST /auth/signup                        - Register and receive a JWT
//! POST /auth/signin                        - Sign in and receive a JWT
//!
//! # Users (requires bearer token)
//! GET  /api/users/profile                  - Current user's profile
//!
//! # Products
//! GET  /api/products                       - Filtered/paginated catalog query
//! GET  /api/products/id/{id}               - Product detail
//! GET  /api/products/search?q=             - Keyword search
//!
//! # Cart (requires bearer token)
//! GET  /api/cart                           - Current user's cart with items
//! PUT  /api/cart/add                       - Add a product to the cart
//! PUT  /api/cart_items/{id}                - Change a cart item's quantity
//! DELETE /api/cart_items/{id}              - Remove a cart item
//!
//! # Orders (requires bearer token)
//! POST /api/orders                         - Checkout the cart into an order
//! GET  /api/orders/user                    - Current user's order history
//! GET  /api/orders/{id}                    - Order detail
//!
//! # Reviews
//! POST /api/reviews/create                 - Review a product (bearer)
//! GET  /api/reviews/product/{product_id}   - Reviews for a product
//!
//! # Admin (requires admin role)
//! POST   /api/admin/products               - Create a product
//! PUT    /api/admin/products/{id}          - Update a product
//! DELETE /api/admin/products/{id}          - Delete a product
//! GET    /api/admin/orders                 - All orders
//! PUT    /api/admin/orders/{id}/placed     - Mark placed (completes payment)
//! PUT    /api/admin/orders/{id}/confirmed  - Mark confirmed
//! PUT    /api/admin/orders/{id}/ship       - Mark shipped
//! PUT    /api/admin/orders/{id}/deliver    - Mark delivered
//! PUT    /api/admin/orders/{id}/cancel     - Cancel
//! DELETE /api/admin/orders/{id}            - Delete an order
//! ```

pub mod admin_orders;
pub mod admin_products;
pub mod auth;
pub mod cart;
pub mod home;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// JSON message envelope used by handlers that return no entity.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
    pub status: bool,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: true,
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
}

/// Create the authenticated customer API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/profile", get(users::profile))
        .route("/products", get(products::list))
        .route("/products/id/{id}", get(products::by_id))
        .route("/products/search", get(products::search))
        .route("/cart", get(cart::get_cart))
        .route("/cart/add", put(cart::add_item))
        .route(
            "/cart_items/{id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .route("/orders", post(orders::create))
        .route("/orders/user", get(orders::history))
        .route("/orders/{id}", get(orders::by_id))
        .route("/reviews/create", post(reviews::create))
        .route("/reviews/product/{product_id}", get(reviews::for_product))
}

/// Create the admin API router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(admin_products::create))
        .route(
            "/products/{id}",
            put(admin_products::update).delete(admin_products::remove),
        )
        .route("/orders", get(admin_orders::list))
        .route("/orders/{id}/placed", put(admin_orders::placed))
        .route("/orders/{id}/confirmed", put(admin_orders::confirmed))
        .route("/orders/{id}/ship", put(admin_orders::ship))
        .route("/orders/{id}/deliver", put(admin_orders::deliver))
        .route("/orders/{id}/cancel", put(admin_orders::cancel))
        .route("/orders/{id}", delete(admin_orders::remove))
}

/// Assemble the full application router.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::welcome))
        .nest("/auth", auth_routes())
        .nest("/api", api_routes())
        .nest("/api/admin", admin_routes())
}
