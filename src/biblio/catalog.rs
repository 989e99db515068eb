//! The ordered in-memory collection of books.
//!
//! Insertion order is preserved and is what listing reports. Lookups are
//! linear scans that stop at the first match; the add operation keeps ids
//! unique, so a first match is the only match.

use crate::model::Book;

#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book at the end of the catalog.
    ///
    /// Callers are responsible for the id-uniqueness check; see
    /// [`crate::commands::add`].
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// First book with the given id, in insertion order.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// All books, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> Book {
        Book::new(title.into(), "Author".into(), id.into())
    }

    #[test]
    fn preserves_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.push(book("1", "First"));
        catalog.push(book("2", "Second"));
        catalog.push(book("3", "Third"));

        let titles: Vec<_> = catalog.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let mut catalog = Catalog::new();
        catalog.push(book("1", "First"));
        assert!(catalog.find("999").is_none());
    }

    #[test]
    fn find_mut_reaches_the_stored_book() {
        let mut catalog = Catalog::new();
        catalog.push(book("1", "First"));
        catalog.find_mut("1").unwrap().loan();
        assert!(!catalog.find("1").unwrap().available);
    }
}
