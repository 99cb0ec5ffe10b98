//! Repository layer for book storage

pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Record store for books.
///
/// Implementations assign `id` and `created_at` on insert and never change
/// them afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, newest first
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn find(&self, id: Uuid) -> AppResult<Option<Book>>;

    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Replace every mutable field; `None` when no book has this id
    async fn replace(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>>;

    /// `false` when no book has this id
    async fn remove(&self, id: Uuid) -> AppResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the book store
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by PostgreSQL
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self::with_store(Arc::new(PgBookStore::new(pool)))
    }

    /// Create a repository backed by a process-local store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryBookStore::new()))
    }

    pub fn with_store(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }
}
