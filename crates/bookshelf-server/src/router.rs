use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;
use bookshelf_store::BookStore;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all Bookshelf endpoints.
pub fn build_router(store: Arc<dyn BookStore>) -> Router {
    Router::new()
        .route("/books", get(handler::list_books).post(handler::create_book))
        .route("/books/:id", get(handler::get_book))
        .route("/checkout", patch(handler::checkout_book))
        .route("/return", patch(handler::return_book))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}
