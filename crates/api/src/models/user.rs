//! User and address domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use demart_core::{AddressId, Email, UserId, UserRole};

/// A registered user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// Argon2 hash of the password. Never serialized to clients.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Optional mobile number.
    pub mobile: Option<String>,
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// A shipping address, owned by exactly one user.
///
/// Orders reference an address row as their shipping destination.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub mobile: Option<String>,
}
