//! Repository layer for book persistence

pub mod json_file;
pub mod memory;
pub mod store;

use std::{path::PathBuf, sync::Arc};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{BookStore, StoreError};

use crate::models::Book;

/// Main repository struct wrapping the configured backing store
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn BookStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Repository backed by a JSON file at `path`
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::new(path)))
    }

    /// Load the full book list.
    ///
    /// A store that is absent, unreadable or corrupt yields an empty list and
    /// is immediately replaced by an empty store. Only a failure to create
    /// that fresh store is returned.
    pub async fn load(&self) -> Result<Vec<Book>, StoreError> {
        match self.store.read().await {
            Ok(books) => Ok(books),
            Err(e) => {
                match &e {
                    StoreError::Missing => tracing::info!("No book store found, creating an empty one"),
                    StoreError::Malformed(_) => {
                        tracing::warn!("Book store is corrupt, starting with an empty list: {}", e)
                    }
                    _ => tracing::warn!("Book store is unreadable, starting with an empty list: {}", e),
                }
                self.store.write(&[]).await?;
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the store with the full book list
    pub async fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        self.store.write(books).await
    }
}
