//! Facilitator CRUD handlers.

use crate::error::ApiError;
use crate::models::Facilitator;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Facilitator>>, ApiError> {
    let facilitators: Vec<Facilitator> = state
        .backend
        .table("facilitators")
        .select("*")
        .fetch()
        .await?;
    Ok(Json(facilitators))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Facilitator>, ApiError> {
    let facilitator: Facilitator = state
        .backend
        .table("facilitators")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(facilitator))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Facilitator>, JsonRejection>,
) -> Result<Json<Facilitator>, ApiError> {
    let Json(facilitator) = body?;
    state
        .backend
        .table("facilitators")
        .insert(&facilitator)
        .await?;
    tracing::info!(facilitator = %facilitator.name, "created facilitator");
    Ok(Json(facilitator))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("facilitators")
        .eq("id", &id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
