//! HTTP handlers: one module per entity, plus the aggregation endpoints.

pub mod auth;
pub mod authors;
pub mod books;
pub mod course_books;
pub mod course_participants;
pub mod courses;
pub mod discussions;
pub mod facilitators;
pub mod management;
pub mod reading_ratings;
pub mod readings;
