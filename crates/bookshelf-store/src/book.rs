use serde::{Deserialize, Serialize};

/// A single inventory record.
///
/// `quantity` counts the copies currently on the shelf. It is signed so that
/// records created with a negative count round-trip unchanged; such records
/// simply cannot be checked out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Whether at least one copy can be checked out.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// The records every freshly started inventory holds.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
        Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        Book::new("3", "War and Peace", "Leo Tolstoy", 6),
    ]
}
