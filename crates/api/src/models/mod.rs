//! Domain model types.
//!
//! Row types decoded straight from `PostgreSQL` via `sqlx::FromRow` and
//! serialized to clients via `serde`. Derived collections (cart items, order
//! items) are loaded separately and attached with `#[sqlx(skip)]` fields.

pub mod cart;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use cart::{Cart, CartItem};
pub use order::{Order, OrderItem};
pub use product::{Category, Product};
pub use review::Review;
pub use user::{Address, User};
