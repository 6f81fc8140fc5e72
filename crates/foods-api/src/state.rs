//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use foods_auth::JwtDecoder;
use foods_core::config::AppConfig;
use foods_database::DatabasePool;
use foods_entity::food::Food;
use foods_entity::user::User;
use foods_service::{AuthService, ResourceController};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Cloning is cheap:
/// controllers hold their repositories behind `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent with the in-memory provider
    pub db_pool: Option<DatabasePool>,
    /// Controller for `/foods`
    pub foods: ResourceController<Food>,
    /// Controller for `/users`
    pub users: ResourceController<User>,
    /// Registration and login
    pub auth_service: Arc<AuthService>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
}
