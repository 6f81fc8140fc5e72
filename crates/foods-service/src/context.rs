//! Authenticated caller context.

use foods_auth::Claims;
use foods_entity::user::UserRole;

/// Identity of the caller, taken from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// User identifier.
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Role at token issuance.
    pub role: UserRole,
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl RequestContext {
    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
