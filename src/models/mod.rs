//! Entity records mirroring backend table rows, plus response-only DTOs.
//!
//! Field names reproduce the backend wire contract: the book-club tables use
//! camelCase keys, the discussion tables use snake_case. Every container is
//! `#[serde(default)]` so partial create bodies decode with zero values, the
//! same way the original clients relied on.

mod dto;

pub use dto::{
    CourseDetails, CourseManagement, CourseParticipantProfile, DiscussionManagement,
    DiscussionSummary, ReadingWithRatings,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub nationality: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub facilitator_id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Join row linking a course to one of its books.
///
/// Wire names are mixed on purpose: the live table's book column is
/// `book_id` (the details join selects it by that name) while the other
/// columns kept the camelCase keys the rest of the book-club tables use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseBook {
    pub id: i32,
    #[serde(rename = "courseId")]
    pub course_id: i32,
    #[serde(rename = "book_id")]
    pub book_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseParticipant {
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Facilitator {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discussion {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
}

/// A reading assigned to a discussion: a book chapter, an article URL, or a
/// video, depending on `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reading {
    pub id: i32,
    pub discussion_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub book_id: i32,
    pub video_url: String,
    pub discussion_prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingRating {
    pub id: i32,
    pub reading_id: i32,
    pub user_id: i32,
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionAttendance {
    pub id: i32,
    pub discussion_id: i32,
    pub user_id: i32,
    pub attended: bool,
}
