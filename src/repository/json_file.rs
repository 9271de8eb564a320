//! JSON file store

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::store::{decode, encode, BookStore, StoreError};
use crate::models::Book;

/// Keeps the book list in a single pretty-printed JSON file.
///
/// Writes land in `<path>.tmp` first and are renamed over the target, so a
/// reader never sees a partially written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl BookStore for JsonFileStore {
    async fn read(&self) -> Result<Vec<Book>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::Missing),
            Err(e) => return Err(StoreError::Io(e)),
        };
        decode(&bytes)
    }

    async fn write(&self, books: &[Book]) -> Result<(), StoreError> {
        let json = encode(books)?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        tracing::debug!("Wrote {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}
