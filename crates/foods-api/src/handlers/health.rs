//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let storage = match &state.db_pool {
        Some(pool) => {
            pool.health_check().await?;
            "postgres"
        }
        None => "memory",
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: storage.to_string(),
    }))
}
