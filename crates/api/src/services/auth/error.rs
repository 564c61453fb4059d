//! Authentication error types.

use thiserror::Error;

use demart_core::UserId;

use super::token::TokenError;
use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
///
/// The display strings for the credential and duplicate-email variants are
/// part of the API contract and are returned to clients verbatim.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] demart_core::EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Wrong password, or no account for the email. Deliberately the same
    /// message for both so account existence does not leak.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration with an email that is already registered.
    #[error("Email Is Already Used With Another Account")]
    EmailTaken,

    /// No user with the given ID.
    #[error("user not found with id {0}")]
    UserNotFound(UserId),

    /// A valid token referenced an email with no account behind it.
    #[error("user not exist with email {0}")]
    UserNotFoundByEmail(String),

    /// Bearer token rejected.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
