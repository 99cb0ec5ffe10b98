//! Library statistics

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, ReadingStatus},
    services::books::BooksService,
};

/// Counts per reading status
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub total: usize,
    pub want_to_read: usize,
    pub reading: usize,
    pub completed: usize,
    /// Mean rating of completed books
    pub average_rating: Option<f64>,
}

impl LibrarySummary {
    pub fn from_books(books: &[Book]) -> Self {
        let mut summary = LibrarySummary {
            total: books.len(),
            ..Default::default()
        };
        let mut rating_sum = 0i64;

        for book in books {
            match book.status {
                ReadingStatus::WantToRead => summary.want_to_read += 1,
                ReadingStatus::Reading => summary.reading += 1,
                ReadingStatus::Completed => {
                    summary.completed += 1;
                    rating_sum += i64::from(book.rating);
                }
            }
        }

        if summary.completed > 0 {
            summary.average_rating = Some(rating_sum as f64 / summary.completed as f64);
        }
        summary
    }
}

#[derive(Clone)]
pub struct StatsService {
    books: BooksService,
}

impl StatsService {
    pub fn new(books: BooksService) -> Self {
        Self { books }
    }

    pub async fn summary(&self) -> AppResult<LibrarySummary> {
        let books = self.books.list().await?;
        Ok(LibrarySummary::from_books(&books))
    }
}
