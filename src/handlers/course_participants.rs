//! Course participant handlers. Rows are addressed by the
//! (courseId, userId) pair.

use crate::error::ApiError;
use crate::models::CourseParticipant;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseParticipant>>, ApiError> {
    let participants: Vec<CourseParticipant> = state
        .backend
        .table("course_participants")
        .select("*")
        .fetch()
        .await?;
    Ok(Json(participants))
}

pub async fn get(
    State(state): State<AppState>,
    Path((course_id, user_id)): Path<(String, String)>,
) -> Result<Json<CourseParticipant>, ApiError> {
    let participant: CourseParticipant = state
        .backend
        .table("course_participants")
        .select("*")
        .eq("course_id", &course_id)
        .eq("user_id", &user_id)
        .single()
        .fetch()
        .await?;
    Ok(Json(participant))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CourseParticipant>, JsonRejection>,
) -> Result<Json<CourseParticipant>, ApiError> {
    let Json(participant) = body?;
    state
        .backend
        .table("course_participants")
        .insert(&participant)
        .await?;
    Ok(Json(participant))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((course_id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("course_participants")
        .eq("course_id", &course_id)
        .eq("user_id", &user_id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
