use crate::book::Book;
use crate::error::StoreResult;

/// Ordered, mutable book inventory.
///
/// All implementations must satisfy these invariants:
/// - `list` returns records in insertion order.
/// - Lookups resolve duplicate ids to the earliest inserted record.
/// - `checkout` never takes a quantity below zero, even under concurrent calls.
/// - Records are never removed.
pub trait BookStore: Send + Sync {
    /// Snapshot of every record, in insertion order.
    fn list(&self) -> Vec<Book>;

    /// Find the first record whose id equals `id` (case-sensitive).
    ///
    /// Returns `Err(StoreError::NotFound)` when no record matches.
    fn find_by_id(&self, id: &str) -> StoreResult<Book>;

    /// Append a record verbatim. Duplicate ids are accepted.
    fn insert(&self, book: Book) -> StoreResult<Book>;

    /// Take one copy off the shelf and return the updated record.
    ///
    /// Fails with `NotFound` for an unknown id and `Unavailable` when the
    /// record's quantity is already zero or below.
    fn checkout(&self, id: &str) -> StoreResult<Book>;

    /// Put one copy back on the shelf and return the updated record.
    ///
    /// There is no upper bound on the quantity.
    fn return_book(&self, id: &str) -> StoreResult<Book>;
}
