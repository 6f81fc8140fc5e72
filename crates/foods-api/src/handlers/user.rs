//! Account and user management handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use tracing::debug;
use validator::Validate;

use foods_core::error::AppError;
use foods_entity::user::User;
use foods_service::ResourceParams;
use foods_service::auth::LoginToken;
use foods_service::controller::QueryParams;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::ApiReply;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiReply<User>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let reply = state
        .auth_service
        .register(&req.username, &req.email, &req.passwd)
        .await?;
    Ok(reply.into())
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiReply<LoginToken>, ApiError> {
    let Json(req) = payload?;
    Ok(state.auth_service.login(&req.email, &req.passwd).await?.into())
}

/// GET /users?page=&role=
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<QueryParams>,
) -> Result<ApiReply<User>, ApiError> {
    debug!(caller = %auth.user_id, "Listing users");
    Ok(state.users.get_all(&query).await?.into())
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(params): Path<ResourceParams>,
) -> Result<ApiReply<User>, ApiError> {
    Ok(state.users.get_id(&params).await?.into())
}

/// PATCH /users/{id}
///
/// Changing `role` requires an admin caller.
pub async fn edit_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(params): Path<ResourceParams>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<ApiReply<User>, ApiError> {
    let Json(body) = payload?;
    if body.role.is_some() && !auth.is_admin() {
        return Err(AppError::unauthorized("Not allowed", "Only admins may change roles").into());
    }

    debug!(caller = %auth.user_id, id = ?params.id, "Editing user");
    Ok(state.users.edit(&params, body).await?.into())
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(params): Path<ResourceParams>,
) -> Result<ApiReply<User>, ApiError> {
    debug!(caller = %auth.user_id, id = ?params.id, "Deleting user");
    Ok(state.users.delete(&params).await?.into())
}
