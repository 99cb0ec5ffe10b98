//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

const BOOK_COLUMNS: &str =
    "id, title, author, genre, status, rating, cover_url, review, created_at";

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY created_at DESC",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, author, genre, status, rating, cover_url, review)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.status.as_str())
        .bind(book.rating)
        .bind(&book.cover_url)
        .bind(&book.review)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn replace(&self, id: Uuid, book: &NewBook) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET title = $2, author = $3, genre = $4, status = $5,
                rating = $6, cover_url = $7, review = $8
            WHERE id = $1
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.status.as_str())
        .bind(book.rating)
        .bind(&book.cover_url)
        .bind(&book.review)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
