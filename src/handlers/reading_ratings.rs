//! Reading rating CRUD handlers.

use crate::error::ApiError;
use crate::models::ReadingRating;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReadingRating>, ApiError> {
    let rating: ReadingRating = state
        .backend
        .table("reading_ratings")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(rating))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ReadingRating>, JsonRejection>,
) -> Result<Json<ReadingRating>, ApiError> {
    let Json(rating) = body?;
    state.backend.table("reading_ratings").insert(&rating).await?;
    Ok(Json(rating))
}

/// Full-resource replace by id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ReadingRating>, JsonRejection>,
) -> Result<Json<ReadingRating>, ApiError> {
    let Json(rating) = body?;
    state
        .backend
        .table("reading_ratings")
        .eq("id", &id)
        .update(&rating)
        .await?;
    Ok(Json(rating))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("reading_ratings")
        .eq("id", &id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
