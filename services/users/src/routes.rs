//! Users service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{ListQuery, NewUser, UpdateUser},
    state::AppState,
    validation,
};

/// Create the router for the users service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/:id", get(read_user))
        .route("/users/:id", patch(update_user))
        .route("/users/:id", delete(delete_user))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "users-service"
    }))
}

/// Create a new user
///
/// Every field is required and validated before the insert. A unique
/// constraint violation on email or phone number surfaces as a 400.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_email(&payload.email).map_err(|reason| ApiError::Validation {
        field: "email",
        reason,
    })?;
    validation::validate_ph_number(payload.ph_number).map_err(|reason| ApiError::Validation {
        field: "ph_number",
        reason,
    })?;

    let user = state.user_repository.create(&payload).await?;

    Ok(Json(user))
}

/// List users with offset/limit pagination
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state
        .user_repository
        .list(query.offset(), query.limit())
        .await?;

    Ok(Json(users))
}

/// Fetch a user by ID
pub async fn read_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Merge the present fields of the payload onto a user
///
/// Only fields present in the body are validated; absent fields keep their
/// stored values and bypass validation entirely. `updated_at` is refreshed
/// on every successful call, even with an empty body.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUser>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(email) = &payload.email {
        validation::validate_email(email).map_err(|reason| ApiError::Validation {
            field: "email",
            reason,
        })?;
    }
    if let Some(ph_number) = payload.ph_number {
        validation::validate_ph_number(ph_number).map_err(|reason| ApiError::Validation {
            field: "ph_number",
            reason,
        })?;
    }

    let user = state
        .user_repository
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.user_repository.delete(id).await?;

    if deleted {
        Ok(Json(json!({ "ok": true })))
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}
