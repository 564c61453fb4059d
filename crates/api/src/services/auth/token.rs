//! JWT bearer-token issuance and validation.
//!
//! Tokens are HS256-signed with the configured secret and carry the user's
//! email as the `sub` claim plus an `exp` timestamp. The default 60 second
//! leeway of `jsonwebtoken` tolerates clock skew.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use demart_core::Email;

/// Errors returned by token operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token creation failed")]
    Creation,
}

/// JWT claims payload.
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    /// User email.
    sub: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    exp: u64,
}

/// HS256 signing and verification keys derived from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    /// Build keys from the shared secret; `ttl` bounds token lifetime.
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token identifying the given email.
    pub fn generate(&self, email: &Email) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Creation)?;
        let claims = JwtClaims {
            sub: email.as_str().to_owned(),
            exp: (now + self.ttl).as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Creation)
    }

    /// Validate a token and return the email it identifies.
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<JwtClaims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn keys(secret: &str) -> JwtKeys {
        JwtKeys::new(secret.as_bytes(), Duration::from_secs(3600))
    }

    #[test]
    fn test_generate_and_validate_roundtrip() {
        let keys = keys("test-secret-test-secret-test-secret");
        let email = Email::parse("user@example.com").unwrap();

        let token = keys.generate(&email).unwrap();
        let subject = keys.subject(&token).unwrap();

        assert_eq!(subject, "user@example.com");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = keys("test-secret-test-secret-test-secret");
        let other = keys("another-secret-another-secret-another");
        let email = Email::parse("user@example.com").unwrap();

        let token = issuer.generate(&email).unwrap();
        assert!(matches!(
            other.subject(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let keys = keys("test-secret-test-secret-test-secret");
        assert!(matches!(
            keys.subject("not.a.token"),
            Err(TokenError::Malformed)
        ));
    }
}
