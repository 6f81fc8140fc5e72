//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `FOODS__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_JWT_TTL_MINUTES};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage backing settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and credential settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay and
    /// environment variables prefixed with `FOODS` (`FOODS__SERVER__PORT`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOODS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                AppError::configuration("Failed to build config", e.to_string())
            })?;

        let loaded: Self = config.try_deserialize().map_err(|e| {
            AppError::configuration("Failed to deserialize config", e.to_string())
        })?;
        loaded.validate()?;
        tracing::debug!(env, provider = ?loaded.database.provider, "Configuration loaded");
        Ok(loaded)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.provider == DatabaseProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "Invalid configuration",
                "database.url is required for the postgres provider",
            ));
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration(
                "Invalid configuration",
                "auth.jwt_secret must not be empty",
            ));
        }
        if !(1..=MAX_JWT_TTL_MINUTES).contains(&self.auth.jwt_ttl_minutes) {
            return Err(AppError::configuration(
                "Invalid configuration",
                format!(
                    "auth.jwt_ttl_minutes must be between 1 and {MAX_JWT_TTL_MINUTES}, got {}",
                    self.auth.jwt_ttl_minutes
                ),
            ));
        }
        Ok(())
    }
}
