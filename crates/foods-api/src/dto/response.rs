//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use foods_core::types::{Envelope, Reply};

/// A controller [`Reply`] ready to be sent: its status and its
/// `{ "results": [...] }` body, nothing else.
#[derive(Debug)]
pub struct ApiReply<T>(pub Reply<T>);

impl<T> From<Reply<T>> for ApiReply<T> {
    fn from(reply: Reply<T>) -> Self {
        Self(reply)
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let Reply { status, body } = self.0;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
        (status, Json::<Envelope<T>>(body)).into_response()
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Active storage provider.
    pub storage: String,
}
