//! Book validation and storage service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::{BookStore, Repository},
};

/// Validates book payloads and delegates to the record store.
///
/// No invalid record ever reaches the store: every write goes through
/// [`BookPayload::into_new_book`] first.
#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self {
            store: repository.books,
        }
    }

    /// All books, newest first
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.store
            .find(id)
            .await?
            .ok_or_else(AppError::book_not_found)
    }

    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        let new_book = payload.into_new_book()?;
        let book = self.store.insert(&new_book).await?;
        tracing::info!(
            book_id = %book.id,
            status = book.status.as_str(),
            "Book created: {}",
            book.title
        );
        Ok(book)
    }

    /// Full replacement of a book's mutable fields.
    ///
    /// Existence is checked before the payload is validated, so an unknown
    /// id is always reported as not found.
    pub async fn update(&self, id: Uuid, payload: BookPayload) -> AppResult<Book> {
        let existing = self.get(id).await?;
        let new_book = payload.into_new_book()?;

        // The row can vanish between the lookup and the write.
        let book = self
            .store
            .replace(id, &new_book)
            .await?
            .ok_or_else(AppError::book_not_found)?;

        if existing.status != book.status {
            tracing::info!(
                book_id = %id,
                "Book status changed: {} -> {}",
                existing.status.as_str(),
                book.status.as_str()
            );
        }
        tracing::debug!(book_id = %id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.store.remove(id).await? {
            return Err(AppError::book_not_found());
        }
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Store reachability, for readiness checks
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
