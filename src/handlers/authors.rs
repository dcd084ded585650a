//! Author CRUD handlers.

use crate::error::ApiError;
use crate::models::Author;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Author>>, ApiError> {
    let authors: Vec<Author> = state.backend.table("authors").select("*").fetch().await?;
    Ok(Json(authors))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Author>, ApiError> {
    let author: Author = state
        .backend
        .table("authors")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(author))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Author>, JsonRejection>,
) -> Result<Json<Author>, ApiError> {
    let Json(author) = body?;
    state.backend.table("authors").insert(&author).await?;
    tracing::info!(author = %author.name, "created author");
    Ok(Json(author))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.backend.table("authors").eq("id", &id).delete().await?;
    Ok(StatusCode::NO_CONTENT)
}
