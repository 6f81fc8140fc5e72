//! JWT token creation with configurable signing and TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use foods_core::config::AuthConfig;
use foods_core::error::AppError;
use foods_entity::user::UserRole;

use super::claims::Claims;

/// Creates signed HS256 tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: u64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.jwt_ttl_minutes,
        }
    }

    /// Issues a token for the given user.
    pub fn issue(&self, id: &str, email: &str, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = i64::try_from(self.ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::internal(
                    "Failed to issue token",
                    format!("Token TTL of {} minutes is out of range", self.ttl_minutes),
                )
            })?;

        let claims = Claims {
            id: id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal("Failed to issue token", e.to_string()))?;

        tracing::debug!(user_id = id, exp = claims.exp, "Token issued");
        Ok(token)
    }
}
