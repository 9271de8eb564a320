//! Book endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    messages,
    models::{parse_book_id, Book, BookQuery, NewBook},
    AppState,
};

/// List books, optionally filtered by `?category=`
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Book>> {
    let query = BookQuery::from_pairs(pairs);
    let books = state.services.catalog.list_books(query.category()).await;
    Json(books)
}

/// Create a book from a raw JSON body.
///
/// The body is parsed by hand rather than through `Json` so that a missing
/// or wrong `Content-Type` does not change the outcome.
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, &'static str)> {
    let new = NewBook::from_json(&body)?;
    state.services.catalog.create_book(new).await?;
    Ok((StatusCode::CREATED, messages::BOOK_CREATED))
}

/// Raw `{id}` segment; `/books/` has none and reads as empty
fn raw_id(path: Option<Path<String>>) -> String {
    path.map(|Path(raw)| raw).unwrap_or_default()
}

/// Mark a book as read
pub async fn mark_read(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> AppResult<&'static str> {
    let id = parse_book_id(&raw_id(path))
        .ok_or_else(|| AppError::not_found(messages::BOOK_NOT_FOUND))?;
    state.services.catalog.mark_read(id).await?;
    Ok(messages::BOOK_MARKED_READ)
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> AppResult<&'static str> {
    let id = parse_book_id(&raw_id(path))
        .ok_or_else(|| AppError::not_found(messages::NO_BOOK_WITH_ID))?;
    state.services.catalog.delete_book(id).await?;
    Ok(messages::BOOK_DELETED)
}
