//! The entity surface: one route per (entity, operation) pair.

use crate::handlers::{
    auth, authors, books, course_books, course_participants, courses, discussions, facilitators,
    management, reading_ratings, readings,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/authors", get(authors::list).post(authors::create))
        .route("/authors/:id", get(authors::get).delete(authors::delete))
        .route("/books", get(books::list))
        .route("/books/author/:id", get(books::list_by_author))
        .route("/books/:id", get(books::get))
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/details/:id", get(courses::details))
        .route("/courses/:id", get(courses::get))
        .route("/courses/:id/management", get(management::course_management))
        .route(
            "/facilitators",
            get(facilitators::list).post(facilitators::create),
        )
        .route(
            "/facilitators/:id",
            get(facilitators::get).delete(facilitators::delete),
        )
        .route(
            "/course-books",
            get(course_books::list).post(course_books::create),
        )
        .route(
            "/course-books/:courseId/:bookId",
            get(course_books::get).delete(course_books::delete),
        )
        .route(
            "/course-participants",
            get(course_participants::list).post(course_participants::create),
        )
        .route(
            "/course-participants/:courseId/:userId",
            get(course_participants::get).delete(course_participants::delete),
        )
        .route(
            "/discussions",
            get(discussions::list).post(discussions::create),
        )
        .route(
            "/discussions/:id",
            get(discussions::get)
                .put(discussions::update)
                .delete(discussions::delete),
        )
        .route(
            "/discussions/:id/management",
            get(management::discussion_management),
        )
        .route("/discussions/:id/attendance", get(discussions::list_attendance))
        .route("/discussion-attendance", post(discussions::create_attendance))
        .route("/readings", get(readings::list).post(readings::create))
        .route(
            "/readings/:id",
            get(readings::get)
                .put(readings::update)
                .delete(readings::delete),
        )
        .route("/readings/:id/ratings", get(readings::list_ratings))
        .route("/reading-ratings", post(reading_ratings::create))
        .route(
            "/reading-ratings/:id",
            get(reading_ratings::get)
                .put(reading_ratings::update)
                .delete(reading_ratings::delete),
        )
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .with_state(state)
}
