//! Business logic services

pub mod catalog;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub async fn new(repository: Repository) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogService::open(repository).await?,
        })
    }
}
