//! Food catalog handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};

use foods_entity::food::Food;
use foods_service::ResourceParams;
use foods_service::controller::QueryParams;

use crate::dto::response::ApiReply;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /foods
pub async fn create_food(
    State(state): State<AppState>,
    payload: Result<Json<Food>, JsonRejection>,
) -> Result<ApiReply<Food>, ApiError> {
    let Json(body) = payload?;
    Ok(state.foods.post(body).await?.into())
}

/// GET /foods?page=&region=
pub async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<ApiReply<Food>, ApiError> {
    Ok(state.foods.get_all(&query).await?.into())
}

/// GET /foods/{id}
pub async fn get_food(
    State(state): State<AppState>,
    Path(params): Path<ResourceParams>,
) -> Result<ApiReply<Food>, ApiError> {
    Ok(state.foods.get_id(&params).await?.into())
}

/// PUT|PATCH /foods/{id}
pub async fn edit_food(
    State(state): State<AppState>,
    Path(params): Path<ResourceParams>,
    payload: Result<Json<Food>, JsonRejection>,
) -> Result<ApiReply<Food>, ApiError> {
    let Json(body) = payload?;
    Ok(state.foods.edit(&params, body).await?.into())
}

/// DELETE /foods/{id}
pub async fn delete_food(
    State(state): State<AppState>,
    Path(params): Path<ResourceParams>,
) -> Result<ApiReply<Food>, ApiError> {
    Ok(state.foods.delete(&params).await?.into())
}
