//! Response-only composite records, assembled by the aggregation handlers.
//! None of these is ever persisted.

use super::{
    Book, Course, CourseParticipant, Discussion, DiscussionAttendance, Facilitator, Reading,
    ReadingRating, User,
};
use serde::{Deserialize, Serialize};

/// `GET /courses/details/:id` response: a course with its facilitator and
/// the books resolved through the course_books join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetails {
    pub course: Course,
    pub facilitator: Facilitator,
    pub books: Vec<Book>,
}

/// A discussion enriched with its readings, ratings, and attendance. The
/// discussion fields flatten into the object, matching the embedded-struct
/// shape of the original payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionSummary {
    #[serde(flatten)]
    pub discussion: Discussion,
    pub readings: Vec<Reading>,
    pub ratings: Vec<ReadingRating>,
    pub attendance: Vec<DiscussionAttendance>,
}

/// A course participant enriched with its user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseParticipantProfile {
    #[serde(flatten)]
    pub participant: CourseParticipant,
    pub user: User,
}

/// `GET /courses/:id/management` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseManagement {
    pub course: Course,
    pub discussions: Vec<DiscussionSummary>,
    pub participants: Vec<CourseParticipantProfile>,
}

/// A reading with its ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingWithRatings {
    #[serde(flatten)]
    pub reading: Reading,
    pub ratings: Vec<ReadingRating>,
}

/// `GET /discussions/:id/management` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionManagement {
    pub discussion: Discussion,
    pub participants: Vec<CourseParticipantProfile>,
    pub readings: Vec<ReadingWithRatings>,
    pub attendance: Vec<DiscussionAttendance>,
}
