//! # foods-api
//!
//! HTTP API layer for Latino Foods built on Axum.
//!
//! Mounts the generic resource controller for foods and users, the
//! registration and login endpoints, and the middleware stack (CORS,
//! compression, tracing, request logging). Every failure leaves through
//! [`ApiError`](error::ApiError), the one place errors become responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
