//! In-memory book collection

use super::book::{Book, NewBook};

/// Ordered list of books, in insertion order.
///
/// Also issues identifiers: each new id is the creation time in epoch
/// milliseconds, bumped past the highest id seen so far so that two books
/// created within the same millisecond never share one.
#[derive(Debug, Default, Clone)]
pub struct BookCollection {
    books: Vec<Book>,
    last_id: i64,
}

impl BookCollection {
    pub fn new(books: Vec<Book>) -> Self {
        let last_id = books.iter().map(|b| b.id).max().unwrap_or(0);
        Self { books, last_id }
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Books whose category matches exactly, or all books when `category` is `None`
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<Book> {
        match category {
            Some(category) => self
                .books
                .iter()
                .filter(|b| b.category == category)
                .cloned()
                .collect(),
            None => self.books.clone(),
        }
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Append a new book, assigning its id from `now_ms`
    pub fn insert(&mut self, new: NewBook, now_ms: i64) -> &Book {
        let id = self.next_id(now_ms);
        self.books.push(Book::from_new(id, new));
        &self.books[self.books.len() - 1]
    }

    /// Remove the book with the given id, if present
    pub fn remove(&mut self, id: i64) -> Option<Book> {
        self.position(id).map(|index| self.books.remove(index))
    }

    fn next_id(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}
