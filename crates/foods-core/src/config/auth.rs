//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted token lifetime: one year.
pub const MAX_JWT_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in minutes, `1..=MAX_JWT_TTL_MINUTES`.
    #[serde(default = "default_ttl")]
    pub jwt_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_minutes: default_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_ttl() -> u64 {
    60 * 24
}
