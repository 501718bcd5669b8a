//! Items service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{error::ApiError, models::Item, state::AppState};

/// Create the router for the items service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items/:id", get(read_item))
        .route("/items/:id", post(create_item))
        .route("/items/:id", put(update_item))
        .route("/items/:id", delete(delete_item))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "items-service"
    }))
}

/// Fetch an item by key
pub async fn read_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_store.get(id)?;

    Ok(Json(item))
}

/// Create an item under a client-chosen key
pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Item>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_store.create(id, payload)?;

    Ok(Json(json!({
        "message": "Item created",
        "item": item,
    })))
}

/// Replace the item under an occupied key
///
/// This is a full replace: the payload carries every field, and the stored
/// item is overwritten wholesale.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Item>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.item_store.replace(id, payload)?;

    Ok(Json(json!({
        "message": "Item updated",
        "item": item,
    })))
}

/// Delete the item under a key
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.item_store.remove(id)?;

    Ok(Json(json!({
        "message": format!("Item {} was deleted", id),
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::store::ItemStore;

    fn test_app() -> Router {
        create_router(AppState {
            item_store: ItemStore::new(),
        })
    }

    fn json_request(method: &str, path: &str, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(path);

        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }

        match body {
            Some(json_body) => builder.body(Body::from(json_body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn response_to_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_read_returns_stored_fields() {
        let app = test_app();

        let payload = json!({
            "name": "Keyboard",
            "price": 59.9,
            "description": "Mechanical, tenkeyless"
        });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/items/1", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = response_to_json(response).await;
        assert_eq!(created["message"], "Item created");
        assert_eq!(created["item"]["name"], "Keyboard");

        let response = app
            .oneshot(json_request("GET", "/items/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_to_json(response).await;
        assert_eq!(body["name"], "Keyboard");
        assert_eq!(body["price"], 59.9);
        assert_eq!(body["description"], "Mechanical, tenkeyless");
    }

    #[tokio::test]
    async fn test_create_at_occupied_key_returns_400() {
        let app = test_app();

        let payload = json!({ "name": "Keyboard", "price": 59.9 });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/items/1", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Any payload at the same key must be rejected
        let other = json!({ "name": "Mouse", "price": 19.9 });
        let response = app
            .oneshot(json_request("POST", "/items/1", Some(other)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_read_missing_item_returns_404() {
        let app = test_app();

        let response = app
            .oneshot(json_request("GET", "/items/42", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_put_is_a_full_replace() {
        let app = test_app();

        let payload = json!({
            "name": "Keyboard",
            "price": 59.9,
            "description": "Mechanical, tenkeyless"
        });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/items/1", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // No description in the replacement: the stored one must be dropped
        let replacement = json!({ "name": "Mouse", "price": 19.9 });
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/items/1", Some(replacement)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(json_request("GET", "/items/1", None))
            .await
            .unwrap();
        let body = response_to_json(response).await;
        assert_eq!(body["name"], "Mouse");
        assert_eq!(body["price"], 19.9);
        assert!(body["description"].is_null());
    }

    #[tokio::test]
    async fn test_put_missing_item_returns_404() {
        let app = test_app();

        let payload = json!({ "name": "Mouse", "price": 19.9 });
        let response = app
            .oneshot(json_request("PUT", "/items/42", Some(payload)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_200_then_404() {
        let app = test_app();

        let payload = json!({ "name": "Keyboard", "price": 59.9 });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/items/1", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request("DELETE", "/items/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_to_json(response).await;
        assert_eq!(body["message"], "Item 1 was deleted");

        let response = app
            .oneshot(json_request("DELETE", "/items/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
