//! User entity model.

use serde::{Deserialize, Serialize};

use foods_core::error::AppError;
use foods_core::result::AppResult;
use foods_core::traits::Record;
use foods_core::types::FilterPolicy;

use super::role::UserRole;

/// `GET /users?role=` filter.
pub const ROLE_FILTER: FilterPolicy = FilterPolicy {
    key: "role",
    allowed: &["user", "admin"],
    wildcard: "all",
};

/// A registered account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Login email. Unique.
    #[serde(default)]
    pub email: Option<String>,
    /// Argon2 password hash.
    #[serde(default, skip_serializing)]
    pub passwd: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Record for User {
    const RESOURCE: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["username", "email", "role"];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "username" => self.username.as_deref(),
            "email" => self.email.as_deref(),
            "role" => self.role.as_ref().map(UserRole::as_str),
            _ => None,
        }
    }

    fn unique_key(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn check_required(&self) -> AppResult<()> {
        let missing = [
            ("email", self.email.is_none()),
            ("username", self.username.is_none()),
            ("passwd", self.passwd.is_none()),
        ]
        .into_iter()
        .find(|(_, absent)| *absent);

        match missing {
            Some((field, _)) => Err(AppError::validation(
                "Missing user information",
                format!("Path `{field}` is required"),
            )),
            None => Ok(()),
        }
    }

    // Password changes never go through a generic merge.
    fn merge(&mut self, patch: Self) {
        if patch.username.is_some() {
            self.username = patch.username;
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
        if patch.role.is_some() {
            self.role = patch.role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: Some("u1".to_string()),
            username: Some("test1".to_string()),
            email: Some("test1@testing.cl".to_string()),
            passwd: Some("$argon2id$hash".to_string()),
            role: Some(UserRole::User),
        }
    }

    #[test]
    fn test_passwd_is_never_serialized() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("passwd").is_none());
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_merge_ignores_passwd() {
        let mut user = sample();
        user.merge(User {
            passwd: Some("plain".to_string()),
            username: Some("renamed".to_string()),
            ..User::default()
        });
        assert_eq!(user.passwd.as_deref(), Some("$argon2id$hash"));
        assert_eq!(user.username.as_deref(), Some("renamed"));
    }

    #[test]
    fn test_role_field_lookup() {
        assert_eq!(sample().field("role"), Some("user"));
        assert_eq!(sample().field("passwd"), None);
        assert_eq!(sample().field("id"), None);
    }

    #[test]
    fn test_required_fields() {
        assert!(sample().check_required().is_ok());
        let err = User {
            passwd: None,
            ..sample()
        }
        .check_required()
        .unwrap_err();
        assert_eq!(err.detail, "Path `passwd` is required");
    }
}
