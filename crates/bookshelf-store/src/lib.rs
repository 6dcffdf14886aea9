//! Book inventory storage for the Bookshelf service.
//!
//! Records live in an ordered in-memory sequence. There is no persistence:
//! the inventory is rebuilt from the sample data every time the process
//! starts.
//!
//! # Design Rules
//!
//! 1. Listing preserves insertion order (seed records first).
//! 2. Lookup is a linear scan; the earliest record with a matching id wins.
//! 3. Id uniqueness is not enforced on insert.
//! 4. Every read-check-write on a record happens under one write lock.

pub mod book;
pub mod error;
pub mod memory;
pub mod traits;

pub use book::{sample_books, Book};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBookStore;
pub use traits::BookStore;
