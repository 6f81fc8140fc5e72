//! JWT claims structure issued on login.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use foods_entity::user::UserRole;

/// Token payload `{id, email, role}` plus timing claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
