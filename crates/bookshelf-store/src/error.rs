/// Errors from book store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("book not found: {0}")]
    NotFound(String),

    /// The record exists but has no copies left to check out.
    #[error("book not available: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
