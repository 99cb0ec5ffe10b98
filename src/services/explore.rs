//! External catalog search (Open Library) and import

use std::time::Duration;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{
        book::Book,
        catalog::{CatalogBook, CatalogSearchResult},
    },
    services::books::BooksService,
};

/// A completed catalog search
#[derive(Debug, Clone)]
pub struct CatalogSearch {
    /// The query actually sent (after defaulting)
    pub query: String,
    pub total: u64,
    pub items: Vec<CatalogBook>,
}

#[derive(Clone)]
pub struct ExploreService {
    client: reqwest::Client,
    config: CatalogConfig,
    books: BooksService,
}

impl ExploreService {
    pub fn new(config: CatalogConfig, books: BooksService) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("liberia-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            config,
            books,
        })
    }

    /// Query to send: blank input falls back to the configured default
    fn effective_query(&self, query: Option<&str>) -> String {
        match query.map(str::trim) {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => self.config.default_query.clone(),
        }
    }

    fn effective_limit(&self, limit: Option<u32>) -> u32 {
        limit
            .unwrap_or(self.config.default_limit)
            .clamp(1, self.config.max_limit.max(1))
    }

    /// Search the external catalog
    pub async fn search(&self, query: Option<&str>, limit: Option<u32>) -> AppResult<CatalogSearch> {
        let query = self.effective_query(query);
        let limit = self.effective_limit(limit);
        let url = format!("{}/search.json", self.config.base_url.trim_end_matches('/'));

        tracing::debug!("Catalog search - query: {}, limit: {}", query, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str()), ("limit", limit.to_string().as_str())])
            .send()
            .await
            .map_err(|e| AppError::Catalog(format!("Catalog request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::Catalog(format!("Catalog returned an error: {}", e)))?;

        let result: CatalogSearchResult = response
            .json()
            .await
            .map_err(|e| AppError::Catalog(format!("Invalid catalog response: {}", e)))?;

        tracing::info!(
            "Catalog search for {:?} returned {} of {} documents",
            query,
            result.docs.len(),
            result.num_found
        );

        let items = result
            .docs
            .into_iter()
            .map(|doc| doc.with_cover_url(&self.config.covers_url))
            .collect();

        Ok(CatalogSearch {
            query,
            total: result.num_found,
            items,
        })
    }

    /// Add a catalog document to the library as a want-to-read book
    pub async fn import(&self, doc: &CatalogBook) -> AppResult<Book> {
        let payload = doc.to_payload(&self.config.covers_url);
        let book = self.books.create(payload).await?;
        tracing::info!(book_id = %book.id, key = %doc.key, "Imported catalog document");
        Ok(book)
    }
}
