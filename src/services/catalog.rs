//! Catalog management service

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    messages,
    models::{Book, BookCollection, NewBook},
    repository::Repository,
};

/// Owns the in-memory book list and keeps the store in sync with it.
///
/// Every mutation holds the write lock until the store has been rewritten,
/// so flushes happen in the same order as the changes they persist.
#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    books: Arc<RwLock<BookCollection>>,
}

impl CatalogService {
    /// Load the collection from the repository
    pub async fn open(repository: Repository) -> AppResult<Self> {
        let books = repository.load().await?;
        tracing::info!("Book store loaded: {} books", books.len());

        Ok(Self {
            repository,
            books: Arc::new(RwLock::new(BookCollection::new(books))),
        })
    }

    /// List books, optionally restricted to one category
    pub async fn list_books(&self, category: Option<&str>) -> Vec<Book> {
        self.books.read().await.filter_by_category(category)
    }

    /// Add a new unread book and persist the collection
    pub async fn create_book(&self, new: NewBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books.insert(new, Utc::now().timestamp_millis()).clone();

        self.repository.save(books.as_slice()).await?;

        tracing::info!("Book created: id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Flag a book as read. Marking an already read book succeeds again.
    pub async fn mark_read(&self, id: i64) -> AppResult<()> {
        let mut books = self.books.write().await;
        let book = books
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(messages::BOOK_NOT_FOUND))?;
        book.is_read = true;

        self.repository.save(books.as_slice()).await?;

        tracing::info!("Book marked as read: id={}", id);
        Ok(())
    }

    /// Remove a book and persist the collection
    pub async fn delete_book(&self, id: i64) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let removed = books
            .remove(id)
            .ok_or_else(|| AppError::not_found(messages::NO_BOOK_WITH_ID))?;

        self.repository.save(books.as_slice()).await?;

        tracing::info!("Book deleted: id={}", id);
        Ok(removed)
    }
}
