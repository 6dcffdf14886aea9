use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookshelf_store::StoreError;
use serde::Serialize;
use thiserror::Error;

use crate::response::IndentedJson;

pub const MSG_BAD_REQUEST: &str = "Bad Request.";
pub const MSG_MISSING_ID: &str = "Missing id query parameter.";
pub const MSG_NOT_FOUND: &str = "Book not found.";
pub const MSG_NOT_AVAILABLE: &str = "Book not available.";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Body of every failed response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Store(StoreError::Unavailable(_)) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to API clients.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Store(StoreError::NotFound(_)) => MSG_NOT_FOUND.into(),
            Self::Store(StoreError::Unavailable(_)) => MSG_NOT_AVAILABLE.into(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, IndentedJson(ErrorBody { message: self.message() })).into_response()
    }
}
