//! The in-memory book collection

use crate::error::{Result, ShelfError};
use crate::types::Book;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insertion-ordered collection of books, unique by id
///
/// The collection lives for one session; there is no persistence. Lookup,
/// toggling, and removal are keyed by id only. Removing a book never
/// reorders the others.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

/// Aggregate counts over a library
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryStats {
    /// Total number of books
    pub total: usize,

    /// Books marked read
    pub read: usize,

    /// Books not yet read
    pub unread: usize,

    /// Page count across all books
    pub total_pages: u64,

    /// Page count across read books
    pub pages_read: u64,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books in the library
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the library holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Add a book to the end of the collection
    ///
    /// Fails if a book with the same id is already present.
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.get(book.id).is_some() {
            return Err(ShelfError::DuplicateBook(book.id));
        }
        self.books.push(book);
        Ok(())
    }

    /// Look up a book by id
    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Look up a book by id for in-place mutation
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Remove a book by id, returning the removed record
    pub fn remove(&mut self, id: Uuid) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        Ok(self.books.remove(pos))
    }

    /// Flip a book's read flag, returning the new value
    pub fn toggle_read(&mut self, id: Uuid) -> Result<bool> {
        let book = self.get_mut(id).ok_or(ShelfError::BookNotFound(id))?;
        Ok(book.toggle_read())
    }

    /// Books marked read, in insertion order
    pub fn read_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|b| b.read)
    }

    /// Books not yet read, in insertion order
    pub fn unread_books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(|b| !b.read)
    }

    /// Books in the given genre (case-insensitive), in insertion order
    ///
    /// Books without a genre never match.
    pub fn books_in_genre<'a>(&'a self, genre: &'a str) -> impl Iterator<Item = &'a Book> {
        self.books.iter().filter(move |b| {
            b.genre
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(genre))
        })
    }

    /// Distinct genres in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for book in &self.books {
            if let Some(genre) = book.genre.as_deref() {
                if !seen.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
                    seen.push(genre);
                }
            }
        }
        seen
    }

    /// Aggregate counts over the collection
    pub fn stats(&self) -> LibraryStats {
        let mut stats = LibraryStats {
            total: self.books.len(),
            ..Default::default()
        };
        for book in &self.books {
            stats.total_pages += u64::from(book.pages);
            if book.read {
                stats.read += 1;
                stats.pages_read += u64::from(book.pages);
            } else {
                stats.unread += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    fn book(title: &str, pages: u32, genre: Option<&str>, read: bool) -> Book {
        Book::new(title, "Author", pages, genre.map(String::from), read)
    }

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add(book("A", 100, Some("Fantasy"), true)).unwrap();
        library.add(book("B", 200, None, false)).unwrap();
        library.add(book("C", 300, Some("fantasy"), false)).unwrap();
        library
    }

    #[test]
    fn test_add_and_lookup() {
        let mut library = Library::new();
        assert!(library.is_empty());

        let b = book("Dune", 412, None, false);
        let id = b.id;
        library.add(b).unwrap();

        assert_eq!(library.len(), 1);
        assert_eq!(library.get(id).unwrap().title, "Dune");
        assert!(library.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut library = Library::new();
        let b = book("Dune", 412, None, false);
        let dup = b.clone();
        library.add(b).unwrap();

        let err = library.add(dup).unwrap_err();
        assert!(matches!(err, ShelfError::DuplicateBook(_)));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut library = sample_library();
        let id = library.books()[1].id;

        let removed = library.remove(id).unwrap();
        assert_eq!(removed.title, "B");

        let titles: Vec<_> = library.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_remove_missing_is_an_error() {
        let mut library = sample_library();
        let id = Uuid::new_v4();
        assert_eq!(library.remove(id).unwrap_err(), ShelfError::BookNotFound(id));
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn test_toggle_read() {
        let mut library = sample_library();
        let id = library.books()[1].id;

        assert!(library.toggle_read(id).unwrap());
        assert!(library.get(id).unwrap().read);
        assert!(!library.toggle_read(id).unwrap());

        let missing = Uuid::new_v4();
        assert_eq!(
            library.toggle_read(missing).unwrap_err(),
            ShelfError::BookNotFound(missing)
        );
    }

    #[test]
    fn test_filters() {
        let library = sample_library();

        let read: Vec<_> = library.read_books().map(|b| b.title.as_str()).collect();
        assert_eq!(read, ["A"]);

        let unread: Vec<_> = library.unread_books().map(|b| b.title.as_str()).collect();
        assert_eq!(unread, ["B", "C"]);

        // Genre matching ignores case; books without a genre never match
        let fantasy: Vec<_> = library
            .books_in_genre("FANTASY")
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(fantasy, ["A", "C"]);
        assert_eq!(library.books_in_genre("Horror").count(), 0);
    }

    #[test]
    fn test_genres_distinct_first_seen() {
        let library = sample_library();
        assert_eq!(library.genres(), ["Fantasy"]);
    }

    #[test]
    fn test_stats() {
        let library = sample_library();
        let stats = library.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.read, 1);
        assert_eq!(stats.unread, 2);
        assert_eq!(stats.total_pages, 600);
        assert_eq!(stats.pages_read, 100);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(Library::new().stats(), LibraryStats::default());
    }
}
