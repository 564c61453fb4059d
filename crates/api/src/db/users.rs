//! User and address repository.

use sqlx::PgPool;

use demart_core::{Email, UserId, UserRole};

use super::RepositoryError;
use crate::models::{Address, User};

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, mobile, role, created_at";

/// Fields required to create a new user row.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub email: &'a Email,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub mobile: Option<&'a str>,
    pub role: UserRole,
}

/// A shipping address to persist under a user.
#[derive(Debug)]
pub struct NewAddress<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub street_address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub mobile: Option<&'a str>,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by their email address.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user together with their (empty) cart.
    ///
    /// Every user owns exactly one cart, so both rows are inserted in a
    /// single transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn create_with_cart(&self, new_user: NewUser<'_>) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, first_name, last_name, mobile, role)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.mobile)
        .bind(new_user.role)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        sqlx::query("INSERT INTO carts (user_id) VALUES ($1)")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Persist a shipping address under a user.
    pub async fn create_address(
        &self,
        user_id: UserId,
        address: NewAddress<'_>,
    ) -> Result<Address, RepositoryError> {
        let address = sqlx::query_as::<_, Address>(
            "INSERT INTO addresses
                 (user_id, first_name, last_name, street_address, city, state, zip_code, mobile)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, user_id, first_name, last_name, street_address, city, state,
                       zip_code, mobile",
        )
        .bind(user_id)
        .bind(address.first_name)
        .bind(address.last_name)
        .bind(address.street_address)
        .bind(address.city)
        .bind(address.state)
        .bind(address.zip_code)
        .bind(address.mobile)
        .fetch_one(self.pool)
        .await?;

        Ok(address)
    }
}
