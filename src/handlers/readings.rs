//! Reading CRUD handlers.

use crate::error::ApiError;
use crate::models::{Reading, ReadingRating};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Reading>>, ApiError> {
    let readings: Vec<Reading> = state.backend.table("readings").select("*").fetch().await?;
    Ok(Json(readings))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reading>, ApiError> {
    let reading: Reading = state
        .backend
        .table("readings")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(reading))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Reading>, JsonRejection>,
) -> Result<Json<Reading>, ApiError> {
    let Json(reading) = body?;
    state.backend.table("readings").insert(&reading).await?;
    Ok(Json(reading))
}

/// Full-resource replace by id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Reading>, JsonRejection>,
) -> Result<Json<Reading>, ApiError> {
    let Json(reading) = body?;
    state
        .backend
        .table("readings")
        .eq("id", &id)
        .update(&reading)
        .await?;
    Ok(Json(reading))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("readings")
        .eq("id", &id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ratings of one reading.
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReadingRating>>, ApiError> {
    let ratings: Vec<ReadingRating> = state
        .backend
        .table("reading_ratings")
        .select("*")
        .eq("reading_id", &id)
        .fetch()
        .await?;
    Ok(Json(ratings))
}
