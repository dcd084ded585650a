//! Management aggregations: the two deep composite reads.
//!
//! Each tree level is one filtered list query keyed by the parent id; leaf
//! enrichment is a per-item fetch inside a sequential loop. Any failing
//! fetch aborts the whole response; nothing fetched so far is returned.

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Course, CourseManagement, CourseParticipant, CourseParticipantProfile, Discussion,
    DiscussionAttendance, DiscussionManagement, DiscussionSummary, Reading, ReadingRating,
    ReadingWithRatings, User,
};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// Course plus its discussions (each with readings, ratings, attendance)
/// plus its participants (each with the user record).
pub async fn course_management(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseManagement>, ApiError> {
    let backend = &state.backend;

    let course: Course = backend
        .table("courses")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;

    let rows: Vec<Discussion> = backend
        .table("discussions")
        .select("*")
        .eq("course_id", &id)
        .fetch()
        .await?;

    let mut discussions = Vec::with_capacity(rows.len());
    for discussion in rows {
        discussions.push(summarize_discussion(backend, discussion).await?);
    }

    let participants = course_participants(backend, &id).await?;

    Ok(Json(CourseManagement {
        course,
        discussions,
        participants,
    }))
}

/// Discussion plus the participants of its course, its readings (each with
/// ratings), and its attendance.
pub async fn discussion_management(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DiscussionManagement>, ApiError> {
    let backend = &state.backend;

    let discussion: Discussion = backend
        .table("discussions")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;

    let participants = course_participants(backend, discussion.course_id).await?;

    let rows: Vec<Reading> = backend
        .table("readings")
        .select("*")
        .eq("discussion_id", &id)
        .fetch()
        .await?;

    let mut readings = Vec::with_capacity(rows.len());
    for reading in rows {
        let ratings: Vec<ReadingRating> = backend
            .table("reading_ratings")
            .select("*")
            .eq("reading_id", reading.id)
            .fetch()
            .await?;
        readings.push(ReadingWithRatings { reading, ratings });
    }

    let attendance: Vec<DiscussionAttendance> = backend
        .table("discussion_attendance")
        .select("*")
        .eq("discussion_id", &id)
        .fetch()
        .await?;

    Ok(Json(DiscussionManagement {
        discussion,
        participants,
        readings,
        attendance,
    }))
}

/// Attaches readings, ratings, and attendance to one discussion. All three
/// child tables are keyed by discussion_id at this level.
async fn summarize_discussion(
    backend: &Backend,
    discussion: Discussion,
) -> Result<DiscussionSummary, ApiError> {
    let readings: Vec<Reading> = backend
        .table("readings")
        .select("*")
        .eq("discussion_id", discussion.id)
        .fetch()
        .await?;

    let ratings: Vec<ReadingRating> = backend
        .table("reading_ratings")
        .select("*")
        .eq("discussion_id", discussion.id)
        .fetch()
        .await?;

    let attendance: Vec<DiscussionAttendance> = backend
        .table("discussion_attendance")
        .select("*")
        .eq("discussion_id", discussion.id)
        .fetch()
        .await?;

    Ok(DiscussionSummary {
        discussion,
        readings,
        ratings,
        attendance,
    })
}

/// Participants of a course, each enriched with its user record via a
/// per-item single-row fetch.
async fn course_participants(
    backend: &Backend,
    course_id: impl ToString,
) -> Result<Vec<CourseParticipantProfile>, ApiError> {
    let rows: Vec<CourseParticipant> = backend
        .table("course_participants")
        .select("*")
        .eq("course_id", course_id)
        .fetch()
        .await?;

    let mut profiles = Vec::with_capacity(rows.len());
    for participant in rows {
        let user: User = backend
            .table("users")
            .select("*")
            .eq("id", participant.user_id)
            .single()
            .fetch()
            .await?;
        profiles.push(CourseParticipantProfile { participant, user });
    }
    Ok(profiles)
}
