//! Backing store abstraction

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Book;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store does not exist yet")]
    Missing,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store content is not a valid book list: {0}")]
    Malformed(serde_json::Error),

    #[error("failed to encode book list: {0}")]
    Encode(serde_json::Error),
}

/// Durable mirror of the book collection.
///
/// Implementations always read and write the whole list at once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn read(&self) -> Result<Vec<Book>, StoreError>;

    async fn write(&self, books: &[Book]) -> Result<(), StoreError>;
}

/// Serialize the list the way it is laid out on disk (2-space indent)
pub fn encode(books: &[Book]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(books).map_err(StoreError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Book>, StoreError> {
    serde_json::from_slice(bytes).map_err(StoreError::Malformed)
}
