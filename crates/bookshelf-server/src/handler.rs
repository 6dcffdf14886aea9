use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use bookshelf_store::{Book, BookStore};

use crate::error::{ServerError, ServerResult, MSG_BAD_REQUEST, MSG_MISSING_ID};
use crate::response::IndentedJson;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }
}

/// Raw query pairs of the checkout and return endpoints.
pub type QueryPairs = Vec<(String, String)>;

/// First `id` parameter in the query string. An empty value still counts as
/// present; later repeats of `id` are ignored.
fn first_id(query: Result<Query<QueryPairs>, QueryRejection>) -> ServerResult<String> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable query string");
            Vec::new()
        }
    };
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
        .ok_or_else(|| ServerError::BadRequest(MSG_MISSING_ID.into()))
}

/// `GET /books`
pub async fn list_books(State(state): State<AppState>) -> IndentedJson<Vec<Book>> {
    IndentedJson(state.store.list())
}

/// `POST /books`
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, IndentedJson<Book>)> {
    // Decoded regardless of Content-Type.
    let book: Book = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(%err, "unreadable book payload");
        ServerError::BadRequest(MSG_BAD_REQUEST.into())
    })?;
    let created = state.store.insert(book)?;
    tracing::info!(id = %created.id, quantity = created.quantity, "book created");
    Ok((StatusCode::CREATED, IndentedJson(created)))
}

/// `GET /books/:id`
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<IndentedJson<Book>> {
    tracing::debug!(%id, "looking up book");
    let book = state.store.find_by_id(&id)?;
    Ok(IndentedJson(book))
}

/// `PATCH /checkout?id=`
pub async fn checkout_book(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<IndentedJson<Book>> {
    let id = first_id(query)?;
    let book = state.store.checkout(&id)?;
    tracing::info!(id = %book.id, quantity = book.quantity, "book checked out");
    Ok(IndentedJson(book))
}

/// `PATCH /return?id=`
pub async fn return_book(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<IndentedJson<Book>> {
    let id = first_id(query)?;
    let book = state.store.return_book(&id)?;
    tracing::info!(id = %book.id, quantity = book.quantity, "book returned");
    Ok(IndentedJson(book))
}
