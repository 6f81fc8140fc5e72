//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Login email.
    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub passwd: String,
}

/// Login request body.
///
/// Fields default to empty so an incomplete body fails credential
/// checks with `401` instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plain-text password.
    #[serde(default)]
    pub passwd: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let ok = RegisterRequest {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            passwd: "secret1".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = RegisterRequest {
            passwd: "abc".to_string(),
            ..ok.clone()
        };
        assert!(short.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_login_missing_fields_default() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert!(req.passwd.is_empty());
    }
}
