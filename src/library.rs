//! Per-session view of the reading list.
//!
//! A UI layer (web page, TUI, CLI) owns one `LibrarySession` and reads the
//! shelf from it. Every mutation goes through [`BooksService`] and then
//! reloads the snapshot, so the local copy never diverges from the store for
//! longer than a single call.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    services::{books::BooksService, stats::LibrarySummary},
};

pub struct LibrarySession {
    books: BooksService,
    shelf: Vec<Book>,
}

impl LibrarySession {
    /// Open a session and load the current shelf
    pub async fn open(books: BooksService) -> AppResult<Self> {
        let shelf = books.list().await?;
        Ok(Self { books, shelf })
    }

    /// Books as of the last refresh, newest first
    pub fn books(&self) -> &[Book] {
        &self.shelf
    }

    pub fn find(&self, id: Uuid) -> Option<&Book> {
        self.shelf.iter().find(|b| b.id == id)
    }

    pub fn summary(&self) -> LibrarySummary {
        LibrarySummary::from_books(&self.shelf)
    }

    pub async fn refresh(&mut self) -> AppResult<()> {
        self.shelf = self.books.list().await?;
        Ok(())
    }

    pub async fn add(&mut self, payload: BookPayload) -> AppResult<Book> {
        let book = self.books.create(payload).await?;
        self.refresh().await?;
        Ok(book)
    }

    pub async fn edit(&mut self, id: Uuid, payload: BookPayload) -> AppResult<Book> {
        let book = self.books.update(id, payload).await?;
        self.refresh().await?;
        Ok(book)
    }

    pub async fn remove(&mut self, id: Uuid) -> AppResult<()> {
        self.books.delete(id).await?;
        self.refresh().await
    }
}
