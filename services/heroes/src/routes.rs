//! Heroes service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde_json::json;

use crate::{
    error::ApiError,
    models::{ListQuery, NewHero, UpdateHero},
    state::AppState,
};

/// Create the router for the heroes service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/heroes", post(create_hero))
        .route("/heroes", get(list_heroes))
        .route("/heroes/:id", get(read_hero))
        .route("/heroes/:id", patch(update_hero))
        .route("/heroes/:id", delete(delete_hero))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "heroes-service"
    }))
}

/// Create a new hero
pub async fn create_hero(
    State(state): State<AppState>,
    Json(payload): Json<NewHero>,
) -> Result<impl IntoResponse, ApiError> {
    let hero = state.hero_repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create hero: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(hero))
}

/// List heroes with offset/limit pagination
pub async fn list_heroes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let heroes = state
        .hero_repository
        .list(query.offset(), query.limit())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list heroes: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(heroes))
}

/// Fetch a hero by ID
pub async fn read_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let hero = state
        .hero_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get hero: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Hero not found".to_string()))?;

    Ok(Json(hero))
}

/// Merge the present fields of the payload onto a hero
pub async fn update_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateHero>,
) -> Result<impl IntoResponse, ApiError> {
    let hero = state
        .hero_repository
        .update(id, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update hero: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Hero not found".to_string()))?;

    Ok(Json(hero))
}

/// Delete a hero by ID
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.hero_repository.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete hero: {}", e);
        ApiError::InternalServerError
    })?;

    if deleted {
        Ok(Json(json!({ "ok": true })))
    } else {
        Err(ApiError::NotFound("Hero not found".to_string()))
    }
}
