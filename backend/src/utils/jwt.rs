//! JWT token utilities for authentication.
//!
//! Provides stateless token creation and validation. Tokens are HS256-signed,
//! carry the user id and email, and expire after a configured TTL. There is
//! no refresh flow and no revocation: a token is valid until `exp`.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// Message returned for every token that fails verification.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// JWT Claims structure carrying the authenticated identity
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email at the time the token was issued
    pub email: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// Expiry instant for a token issued at `issued_at`, or `None` when the
/// lifetime cannot be represented as a date.
pub fn expiry_after(issued_at: DateTime<Utc>, expires_in_seconds: u64) -> Option<DateTime<Utc>> {
    let ttl = i64::try_from(expires_in_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)?;
    issued_at.checked_add_signed(ttl)
}

fn timestamp_claim(instant: DateTime<Utc>) -> ServiceResult<usize> {
    usize::try_from(instant.timestamp())
        .map_err(|_| ServiceError::internal_error("Token timestamp out of range"))
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from a shared secret and token lifetime.
    pub fn new(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Clock skew is not compensated.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expires_in_seconds)
    }

    /// Token lifetime in seconds.
    pub fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }

    /// Generate a new JWT token for the given user
    pub fn generate_token(
        &self,
        user_id: impl Into<String>,
        email: impl Into<String>,
    ) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = expiry_after(now, self.expires_in_seconds)
            .ok_or_else(|| ServiceError::internal_error("Token lifetime out of range"))?;

        let claims = Claims {
            sub: user_id.into(),
            email: email.into(),
            exp: timestamp_claim(exp)?,
            iat: timestamp_claim(now)?,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a JWT token
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                ServiceError::unauthorized(INVALID_TOKEN_MESSAGE)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt() -> JwtUtils {
        JwtUtils::new("unit-test-secret", 3600)
    }

    #[test]
    fn test_generate_and_validate() {
        let utils = jwt();
        let token = utils.generate_token("user-1", "alice@example.com").unwrap();

        let claims = utils.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let utils = jwt();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            exp: now - 10,
            iat: now - 3610,
        };
        let token = encode(&Header::default(), &claims, &utils.encoding_key).unwrap();

        match utils.validate_token(&token) {
            Err(ServiceError::Unauthorized { message }) => {
                assert_eq!(message, INVALID_TOKEN_MESSAGE)
            }
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let token = JwtUtils::new("another-secret", 3600)
            .generate_token("user-1", "alice@example.com")
            .unwrap();

        assert!(jwt().validate_token(&token).is_err());
    }

    #[test]
    fn test_oversized_lifetime_is_an_error() {
        for ttl in [(i64::MAX / 1000) as u64 + 1, i64::MAX as u64, u64::MAX] {
            let result = JwtUtils::new("unit-test-secret", ttl)
                .generate_token("user-1", "alice@example.com");
            assert!(
                matches!(result, Err(ServiceError::InternalError { .. })),
                "ttl {} should fail without panicking",
                ttl
            );
        }
        assert!(expiry_after(Utc::now(), 86_400).is_some());
    }

    #[test]
    fn test_malformed_and_tampered_tokens_rejected() {
        let utils = jwt();
        assert!(utils.validate_token("").is_err());
        assert!(utils.validate_token("not.a.jwt").is_err());

        let token = utils.generate_token("user-1", "alice@example.com").unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(utils.validate_token(&tampered).is_err());
    }
}
