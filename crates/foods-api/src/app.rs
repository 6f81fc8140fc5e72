//! Application builder: wires repositories, services and middleware into
//! an Axum app and serves it.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};

use foods_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use foods_core::config::{AppConfig, CorsConfig, DatabaseProvider};
use foods_core::error::AppError;
use foods_core::traits::Repository;
use foods_database::migration::run_migrations;
use foods_database::{DatabasePool, FoodRepository, MemoryRepository, UserRepository};
use foods_entity::food::{Food, REGION_FILTER};
use foods_entity::user::{ROLE_FILTER, User};
use foods_service::{AuthService, ResourceController};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_compression_layer())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Builds application state for the configured storage provider.
///
/// With `postgres` this connects and runs pending migrations; with
/// `memory` every collection starts empty.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let provider = config.database.provider;
    let (db_pool, food_repo, user_repo) = match provider {
        DatabaseProvider::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            run_migrations(db.pool()).await?;
            let foods: Arc<dyn Repository<Food>> =
                Arc::new(FoodRepository::new(db.pool().clone()));
            let users: Arc<dyn Repository<User>> =
                Arc::new(UserRepository::new(db.pool().clone()));
            (Some(db), foods, users)
        }
        DatabaseProvider::Memory => {
            warn!("Using in-memory storage; data is lost on shutdown");
            let foods: Arc<dyn Repository<Food>> = Arc::new(MemoryRepository::<Food>::new());
            let users: Arc<dyn Repository<User>> = Arc::new(MemoryRepository::<User>::new());
            (None, foods, users)
        }
    };

    let hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        hasher,
        jwt_encoder,
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        foods: ResourceController::new(food_repo, REGION_FILTER).with_span(info_span!(
            "controller",
            resource = "food",
            provider = ?provider
        )),
        users: ResourceController::new(user_repo, ROLE_FILTER).with_span(info_span!(
            "controller",
            resource = "user",
            provider = ?provider
        )),
        auth_service,
        jwt_decoder,
    })
}

/// Runs the Latino Foods server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Latino Foods server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let cors = config.server.cors.clone();
    let state = build_state(config).await?;
    let db_pool = state.db_pool.clone();

    let app = build_app(state, &cors);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal("Failed to bind", format!("{addr}: {e}")))?;

    info!("Latino Foods server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("Server error", e.to_string()))?;

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
