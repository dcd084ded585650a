//! Course-book join table handlers. Rows are addressed by the
//! (courseId, bookId) pair rather than the surrogate id.

use crate::error::ApiError;
use crate::models::CourseBook;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CourseBook>>, ApiError> {
    let links: Vec<CourseBook> = state
        .backend
        .table("course_books")
        .select("*")
        .fetch()
        .await?;
    Ok(Json(links))
}

pub async fn get(
    State(state): State<AppState>,
    Path((course_id, book_id)): Path<(String, String)>,
) -> Result<Json<CourseBook>, ApiError> {
    let link: CourseBook = state
        .backend
        .table("course_books")
        .select("*")
        .eq("course_id", &course_id)
        .eq("book_id", &book_id)
        .single()
        .fetch()
        .await?;
    Ok(Json(link))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CourseBook>, JsonRejection>,
) -> Result<Json<CourseBook>, ApiError> {
    let Json(link) = body?;
    state.backend.table("course_books").insert(&link).await?;
    Ok(Json(link))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((course_id, book_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .backend
        .table("course_books")
        .eq("course_id", &course_id)
        .eq("book_id", &book_id)
        .delete()
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
