//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use foods_core::config::AuthConfig;
use foods_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 tokens and returns their claims.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let detail = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => "Token has expired".to_string(),
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        "Invalid token signature".to_string()
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => "Invalid token format".to_string(),
                    _ => format!("Token validation failed: {e}"),
                };
                AppError::unauthorized("Invalid token", detail)
            })
    }
}
