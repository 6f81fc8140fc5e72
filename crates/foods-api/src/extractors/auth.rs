//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it, and injects the caller context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use foods_core::error::AppError;
use foods_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing token", "No Authorization header"))?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid token", "Authorization header is not a Bearer token")
        })?;

        let claims = state.jwt_decoder.decode(token)?;
        Ok(AuthUser(RequestContext::from(claims)))
    }
}
