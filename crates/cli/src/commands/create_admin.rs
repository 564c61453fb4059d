//! Admin account bootstrap command.
//!
//! Registration through the API only ever creates customers; the admin
//! surface is reached with an account created here. Idempotent: running it
//! again re-keys the existing account and promotes it to admin.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use super::{CommandError, connect};

/// Create or update the admin account for `email`.
pub async fn run(email: &str, password: &str) -> Result<(), CommandError> {
    let pool = connect().await?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CommandError::PasswordHash(e.to_string()))?
        .to_string();

    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, password_hash, first_name, last_name, role)
         VALUES ($1, $2, 'Admin', 'User', 'admin')
         ON CONFLICT (email) DO UPDATE
             SET password_hash = EXCLUDED.password_hash, role = 'admin'
         RETURNING id",
    )
    .bind(email)
    .bind(&password_hash)
    .fetch_one(&pool)
    .await?;

    // Every user owns exactly one cart, same as API registration
    sqlx::query("INSERT INTO carts (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id)
        .execute(&pool)
        .await?;

    tracing::info!(email, user_id, "admin account ready");
    Ok(())
}
