//! HTTP server for the Bookshelf inventory.
//!
//! Exposes an in-memory book store over a small REST API: list and create
//! books, look one up by id, and check copies out or return them.

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ErrorBody, ServerError, ServerResult};
pub use handler::AppState;
pub use response::IndentedJson;
pub use server::BookshelfServer;
