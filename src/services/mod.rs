//! Business logic services

pub mod books;
pub mod explore;
pub mod stats;

use crate::{config::CatalogConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub explore: explore::ExploreService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> AppResult<Self> {
        let books = books::BooksService::new(repository);
        Ok(Self {
            explore: explore::ExploreService::new(catalog_config, books.clone())?,
            stats: stats::StatsService::new(books.clone()),
            books,
        })
    }
}
