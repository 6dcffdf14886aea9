use std::sync::RwLock;

use crate::book::{sample_books, Book};
use crate::error::{StoreError, StoreResult};
use crate::traits::BookStore;

/// In-memory, `Vec`-backed book store.
///
/// The whole inventory sits behind one `RwLock`. Listing and lookup take the
/// read lock; inserts and quantity changes take the write lock for the entire
/// read-modify-write, so concurrent checkouts of the same record serialize.
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding the sample inventory.
    pub fn seeded() -> Self {
        Self::with_books(sample_books())
    }

    /// Create a store holding `books`, in the given order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.books.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.books.read().expect("lock poisoned").is_empty()
    }

    /// Apply `update` to the first record matching `id` under the write lock.
    fn update_first<F>(&self, id: &str, update: F) -> StoreResult<Book>
    where
        F: FnOnce(&mut Book) -> StoreResult<()>,
    {
        let mut books = self.books.write().expect("lock poisoned");
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        update(book)?;
        Ok(book.clone())
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for InMemoryBookStore {
    fn list(&self) -> Vec<Book> {
        self.books.read().expect("lock poisoned").clone()
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Book> {
        let books = self.books.read().expect("lock poisoned");
        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn insert(&self, book: Book) -> StoreResult<Book> {
        let mut books = self.books.write().expect("lock poisoned");
        books.push(book.clone());
        tracing::debug!(id = %book.id, count = books.len(), "book appended");
        Ok(book)
    }

    fn checkout(&self, id: &str) -> StoreResult<Book> {
        self.update_first(id, |book| {
            if !book.is_available() {
                return Err(StoreError::Unavailable(book.id.clone()));
            }
            book.quantity -= 1;
            Ok(())
        })
    }

    fn return_book(&self, id: &str) -> StoreResult<Book> {
        self.update_first(id, |book| {
            book.quantity = book.quantity.saturating_add(1);
            Ok(())
        })
    }
}

impl std::fmt::Debug for InMemoryBookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBookStore")
            .field("book_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn book(id: &str, quantity: i64) -> Book {
        Book::new(id, format!("Title {id}"), "Anon", quantity)
    }

    // -----------------------------------------------------------------------
    // Listing and lookup
    // -----------------------------------------------------------------------

    #[test]
    fn seeded_store_lists_samples() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(store.list(), sample_books());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryBookStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(InMemoryBookStore::default().is_empty());
    }

    #[test]
    fn find_existing_book() {
        let store = InMemoryBookStore::seeded();
        let found = store.find_by_id("2").unwrap();
        assert_eq!(found.title, "The Great Gatsby");
    }

    #[test]
    fn find_missing_book() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(
            store.find_by_id("42"),
            Err(StoreError::NotFound("42".into()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = InMemoryBookStore::with_books(vec![book("abc", 1)]);
        assert!(store.find_by_id("abc").is_ok());
        assert!(store.find_by_id("ABC").is_err());
    }

    // -----------------------------------------------------------------------
    // Insert
    // -----------------------------------------------------------------------

    #[test]
    fn insert_appends_at_end() {
        let store = InMemoryBookStore::seeded();
        let new = book("4", 1);
        assert_eq!(store.insert(new.clone()).unwrap(), new);

        let all = store.list();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&new));
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let store = InMemoryBookStore::seeded();
        store.insert(Book::new("1", "Shadow", "Someone", 9)).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.find_by_id("1").unwrap().title, "In Search of Lost Time");

        let updated = store.checkout("1").unwrap();
        assert_eq!(updated.title, "In Search of Lost Time");
        assert_eq!(store.list()[3].quantity, 9);
    }

    // -----------------------------------------------------------------------
    // Checkout / return
    // -----------------------------------------------------------------------

    #[test]
    fn checkout_until_unavailable_then_return() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(store.checkout("1").unwrap().quantity, 1);
        assert_eq!(store.checkout("1").unwrap().quantity, 0);
        assert_eq!(store.checkout("1"), Err(StoreError::Unavailable("1".into())));
        assert_eq!(store.find_by_id("1").unwrap().quantity, 0);
        assert_eq!(store.return_book("1").unwrap().quantity, 1);
    }

    #[test]
    fn checkout_refuses_negative_quantity() {
        let store = InMemoryBookStore::with_books(vec![book("x", -2)]);
        assert!(matches!(store.checkout("x"), Err(StoreError::Unavailable(_))));
        assert_eq!(store.find_by_id("x").unwrap().quantity, -2);
    }

    #[test]
    fn checkout_and_return_missing_book() {
        let store = InMemoryBookStore::seeded();
        assert_eq!(store.checkout("nope"), Err(StoreError::NotFound("nope".into())));
        assert_eq!(store.return_book("nope"), Err(StoreError::NotFound("nope".into())));
    }

    #[test]
    fn return_saturates_at_max() {
        let store = InMemoryBookStore::with_books(vec![book("x", i64::MAX)]);
        assert_eq!(store.return_book("x").unwrap().quantity, i64::MAX);
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_checkouts_never_oversell() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryBookStore::with_books(vec![book("hot", 5)]));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.checkout("hot").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 5);
        assert_eq!(store.find_by_id("hot").unwrap().quantity, 0);
    }

    #[test]
    fn debug_format() {
        let debug = format!("{:?}", InMemoryBookStore::seeded());
        assert!(debug.contains("InMemoryBookStore"));
        assert!(debug.contains("book_count: 3"));
    }

    proptest! {
        #[test]
        fn returns_and_checkouts_balance(start in 0i64..50, returns in 0usize..50, checkouts in 0usize..120) {
            let store = InMemoryBookStore::with_books(vec![book("p", start)]);
            for _ in 0..returns {
                store.return_book("p").unwrap();
            }
            let mut served = 0i64;
            for _ in 0..checkouts {
                if store.checkout("p").is_ok() {
                    served += 1;
                }
            }
            let stocked = start + returns as i64;
            prop_assert_eq!(served, stocked.min(checkouts as i64));
            prop_assert_eq!(store.find_by_id("p").unwrap().quantity, stocked - served);
        }
    }
}
