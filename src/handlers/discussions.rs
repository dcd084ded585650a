//! Discussion CRUD handlers, including the attendance listing and creation.

use crate::error::ApiError;
use crate::models::{Discussion, DiscussionAttendance};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Discussion>>, ApiError> {
    let discussions: Vec<Discussion> = state
        .backend
        .table("discussions")
        .select("*")
        .fetch()
        .await?;
    Ok(Json(discussions))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Discussion>, ApiError> {
    let discussion: Discussion = state
        .backend
        .table("discussions")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(discussion))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Discussion>, JsonRejection>,
) -> Result<Json<Discussion>, ApiError> {
    let Json(discussion) = body?;
    state.backend.table("discussions").insert(&discussion).await?;
    tracing::info!(discussion = %discussion.name, "created discussion");
    Ok(Json(discussion))
}

/// Full-resource replace by id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Discussion>, JsonRejection>,
) -> Result<Json<Discussion>, ApiError> {
    let Json(discussion) = body?;
    state
        .backend
        .table("discussions")
        .eq("id", &id)
        .update(&discussion)
        .await?;
    Ok(Json(discussion))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("discussions")
        .eq("id", &id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DiscussionAttendance>>, ApiError> {
    let attendance: Vec<DiscussionAttendance> = state
        .backend
        .table("discussion_attendance")
        .select("*")
        .eq("discussion_id", &id)
        .fetch()
        .await?;
    Ok(Json(attendance))
}

pub async fn create_attendance(
    State(state): State<AppState>,
    body: Result<Json<DiscussionAttendance>, JsonRejection>,
) -> Result<Json<DiscussionAttendance>, ApiError> {
    let Json(attendance) = body?;
    state
        .backend
        .table("discussion_attendance")
        .insert(&attendance)
        .await?;
    Ok(Json(attendance))
}
