//! Business-logic services.
//!
//! Each service wraps the repositories it needs and owns one slice of the
//! domain: authentication, catalog, cart, orders, reviews. Services are
//! constructed per-request from the shared pool; they hold no state of
//! their own.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;

pub use auth::{AuthService, error::AuthError};
pub use cart::{CartError, CartService};
pub use catalog::{CatalogError, CatalogService};
pub use order::{OrderError, OrderService};
pub use review::{ReviewError, ReviewService};
