//! Process-local book store

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

/// Keeps books in insertion order behind an async lock.
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply(target: &mut Book, book: &NewBook) {
    target.title = book.title.clone();
    target.author = book.author.clone();
    target.genre = book.genre.clone();
    target.status = book.status;
    target.rating = book.rating;
    target.cover_url = book.cover_url.clone();
    target.review = book.review.clone();
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        // Later insertions first on equal timestamps: reverse, then stable sort.
        let mut rows: Vec<Book> = books.iter().rev().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let stored = Book {
            id: Uuid::new_v4(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            status: book.status,
            rating: book.rating,
            cover_url: book.cover_url.clone(),
            review: book.review.clone(),
            created_at: Utc::now(),
        };
        self.books.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn replace(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        Ok(books.iter_mut().find(|b| b.id == id).map(|target| {
            apply(target, book);
            target.clone()
        }))
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        Ok(books.len() != before)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
