//! Course handlers, including the course-with-details aggregation.

use crate::error::ApiError;
use crate::models::{Book, Course, CourseBook, CourseDetails, Facilitator};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses: Vec<Course> = state.backend.table("courses").select("*").fetch().await?;
    Ok(Json(courses))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let course: Course = state
        .backend
        .table("courses")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(course))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Course>, JsonRejection>,
) -> Result<Json<Course>, ApiError> {
    let Json(course) = body?;
    state.backend.table("courses").insert(&course).await?;
    tracing::info!(course = %course.title, "created course");
    Ok(Json(course))
}

/// Course plus facilitator plus resolved book list. The per-book fan-out is
/// sequential by design; course book lists are expected to stay small.
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseDetails>, ApiError> {
    let course: Course = state
        .backend
        .table("courses")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;

    // The one deliberate not-found branch in the system.
    if course.facilitator_id == 0 {
        return Err(ApiError::NotFound("Facilitator not found"));
    }

    let facilitator: Facilitator = state
        .backend
        .table("facilitators")
        .select("*")
        .eq("id", course.facilitator_id)
        .single()
        .fetch()
        .await?;

    let links: Vec<CourseBook> = state
        .backend
        .table("course_books")
        .select("book_id")
        .eq("course_id", &id)
        .fetch()
        .await?;

    // Books accumulate in join-row order; the first failing fetch aborts the
    // whole response.
    let mut books = Vec::with_capacity(links.len());
    for link in &links {
        let book: Book = state
            .backend
            .table("books")
            .select("*")
            .eq("id", link.book_id)
            .single()
            .fetch()
            .await?;
        books.push(book);
    }

    Ok(Json(CourseDetails {
        course,
        facilitator,
        books,
    }))
}
