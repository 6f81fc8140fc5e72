//! Route definitions for the Latino Foods HTTP API.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(food_routes())
        .merge(user_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Food catalog: open to everyone
fn food_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/foods",
            post(handlers::food::create_food).get(handlers::food::list_foods),
        )
        .route(
            "/foods/{id}",
            get(handlers::food::get_food)
                .put(handlers::food::edit_food)
                .patch(handlers::food::edit_food)
                .delete(handlers::food::delete_food),
        )
}

/// Accounts: register and login are open, the rest needs a bearer token
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::user::register))
        .route("/users/login", post(handlers::user::login))
        .route("/users", get(handlers::user::list_users))
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .patch(handlers::user::edit_user)
                .delete(handlers::user::delete_user),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
