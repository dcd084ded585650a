//! Book read handlers. Books are maintained out of band; the API only
//! exposes reads.

use crate::error::ApiError;
use crate::models::Book;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books: Vec<Book> = state.backend.table("books").select("*").fetch().await?;
    Ok(Json(books))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book: Book = state
        .backend
        .table("books")
        .select("*")
        .eq("id", &id)
        .single()
        .fetch()
        .await?;
    Ok(Json(book))
}

pub async fn list_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books: Vec<Book> = state
        .backend
        .table("books")
        .select("*")
        .eq("authorId", &author_id)
        .fetch()
        .await?;
    Ok(Json(books))
}
