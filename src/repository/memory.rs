//! In-memory store

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{decode, encode, BookStore, StoreError};
use crate::models::Book;

/// Holds the encoded document in memory instead of on disk.
///
/// Goes through the same encoding as the file store, so what `contents`
/// returns is byte-for-byte what would have been written to a file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw document
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    /// Current document, `None` until the first write
    pub async fn contents(&self) -> Option<String> {
        self.document
            .lock()
            .await
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn read(&self) -> Result<Vec<Book>, StoreError> {
        match self.document.lock().await.as_ref() {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::Missing),
        }
    }

    async fn write(&self, books: &[Book]) -> Result<(), StoreError> {
        let bytes = encode(books)?;
        *self.document.lock().await = Some(bytes);
        Ok(())
    }
}
