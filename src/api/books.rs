//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

use super::{ApiJson, ApiQuery, IndentedJson};

/// Query string pairs in request order
pub type QueryPairs = Vec<(String, String)>;

/// First value of the `id` key
///
/// `?id=` counts as present and looks up the empty id; later repeats are ignored.
fn require_id(pairs: QueryPairs) -> AppResult<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .ok_or(AppError::MissingParameter("id"))
}

/// List all books
pub async fn list_books(State(state): State<crate::AppState>) -> IndentedJson<Vec<Book>> {
    IndentedJson(state.services.books.list().await)
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<IndentedJson<Book>> {
    let book = state.services.books.get_by_id(&id).await?;
    Ok(IndentedJson(book))
}

/// Add a book to the library
///
/// A `null` body creates an empty book.
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<Option<Book>>,
) -> (StatusCode, IndentedJson<Book>) {
    let book = state.services.books.create(book.unwrap_or_default()).await;
    (StatusCode::CREATED, IndentedJson(book))
}

/// Check out a book (decrease its quantity)
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    ApiQuery(pairs): ApiQuery<QueryPairs>,
) -> AppResult<IndentedJson<Book>> {
    let id = require_id(pairs)?;
    let book = state.services.books.checkout(&id).await?;
    Ok(IndentedJson(book))
}

/// Return a book (increase its quantity)
pub async fn return_book(
    State(state): State<crate::AppState>,
    ApiQuery(pairs): ApiQuery<QueryPairs>,
) -> AppResult<IndentedJson<Book>> {
    let id = require_id(pairs)?;
    let book = state.services.books.return_book(&id).await?;
    Ok(IndentedJson(book))
}
