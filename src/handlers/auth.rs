//! Auth handlers: thin delegation to the backend's auth subsystem.

use crate::backend::Credentials;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(credentials) = body?;
    let session = state.backend.sign_in(&credentials).await?;
    tracing::debug!(user = ?session.get("user").and_then(|u| u.get("email")), "signed in");
    Ok(Json(json!({ "message": "Login successful" })))
}

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(credentials) = body?;
    state.backend.sign_up(&credentials).await?;
    Ok(Json(json!({ "message": "Registration successful" })))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    state.backend.sign_out(token).await?;
    Ok(Json(json!({ "message": "Logout successful" })))
}
