//! Data models for the bookshelf

pub mod book;
pub mod collection;

// Re-export commonly used types
pub use book::{parse_book_id, Book, BookQuery, NewBook};
pub use collection::BookCollection;
