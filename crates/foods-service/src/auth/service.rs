//! Registration and credential login.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use foods_auth::{JwtEncoder, PasswordHasher};
use foods_core::error::AppError;
use foods_core::result::AppResult;
use foods_core::traits::Repository;
use foods_core::types::{Envelope, Reply, SearchPredicate};
use foods_entity::user::{User, UserRole};

/// Token issued on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    /// Signed bearer token.
    pub token: String,
}

/// Handles account registration and login.
#[derive(Clone)]
pub struct AuthService {
    /// User storage.
    users: Arc<dyn Repository<User>>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn Repository<User>>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Stores a new account with a hashed password.
    ///
    /// Replies `202` with the stored user; the password hash is never
    /// serialized.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        passwd: &str,
    ) -> AppResult<Reply<User>> {
        let user = User {
            id: None,
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            passwd: Some(self.hasher.hash_password(passwd)?),
            role: Some(UserRole::User),
        };

        let created = self.users.create(user).await?;
        info!(user_id = created.id.as_deref().unwrap_or_default(), "User registered");
        Ok(Reply::accepted(Envelope::one(created)))
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email, missing password and wrong password all fail the
    /// same way.
    pub async fn login(&self, email: &str, passwd: &str) -> AppResult<Reply<LoginToken>> {
        if email.is_empty() || passwd.is_empty() {
            return Err(bad_credentials("Missing email or password"));
        }

        let user = self
            .users
            .search(&SearchPredicate::new("email", email))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| bad_credentials("Unknown email"))?;

        let hash = user
            .passwd
            .as_deref()
            .ok_or_else(|| bad_credentials("Stored user has no password"))?;

        if !self.hasher.verify_password(passwd, hash)? {
            warn!(user_id = user.id.as_deref().unwrap_or_default(), "Password mismatch");
            return Err(bad_credentials("Password mismatch"));
        }

        let id = user.id.as_deref().unwrap_or_default();
        let token = self
            .encoder
            .issue(id, email, user.role.unwrap_or_default())?;

        info!(user_id = id, "User logged in");
        Ok(Reply::created(Envelope::one(LoginToken { token })))
    }
}

fn bad_credentials(detail: &str) -> AppError {
    AppError::unauthorized("Invalid credentials", detail)
}
