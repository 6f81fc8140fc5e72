//! Unified application error types for Latino Foods.
//!
//! Every failure carries an HTTP status (derived from its [`ErrorKind`]),
//! a public message that may be shown to clients, and an internal detail
//! string that is only ever logged server-side.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Malformed or out-of-range request parameters.
    Validation,
    /// Missing or rejected credentials.
    Unauthorized,
    /// The requested resource or identifier does not exist.
    NotFound,
    /// A uniqueness constraint was violated.
    Conflict,
    /// The storage engine could not be reached.
    StorageUnavailable,
    /// A database error that is not a connectivity problem.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// HTTP status code associated with this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::StorageUnavailable => 503,
            Self::Database | Self::Configuration | Self::Internal => 500,
        }
    }

    /// Machine-readable code used in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::Database => "DATABASE_ERROR",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Whether this kind represents a server-side fault (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The unified application error used throughout Latino Foods.
///
/// Constructed where a violated precondition is detected and propagated
/// unchanged to the HTTP layer, which is the single place it is turned
/// into a response.
#[derive(Debug, Error)]
#[error("{kind}: {message} ({detail})")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Message safe to return to the client.
    pub message: String,
    /// Internal diagnostic detail. Never sent to the client.
    pub detail: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: detail.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message, detail)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message, detail)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message, detail)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message, detail)
    }

    /// Create a storage-unavailable error.
    pub fn storage_unavailable(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::StorageUnavailable, message, detail)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message, detail)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message, detail)
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            detail: self.detail.clone(),
            source: None,
        }
    }
}

impl PartialEq for AppError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message && self.detail == other.detail
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Validation, "Invalid JSON", err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, "Configuration error", err)
    }
}
