//! Book model and payload validation

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// ReadingStatus
// ---------------------------------------------------------------------------

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    WantToRead,
    Reading,
    Completed,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 3] = [
        ReadingStatus::WantToRead,
        ReadingStatus::Reading,
        ReadingStatus::Completed,
    ];

    /// Wire and storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::WantToRead => "want-to-read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown reading status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ReadingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

impl TryFrom<String> for ReadingStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReadingStatus::WantToRead => "Want to Read",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Book
// ---------------------------------------------------------------------------

/// A book on the reading list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[sqlx(try_from = "String")]
    pub status: ReadingStatus,
    /// 1-5 for completed books, 0 otherwise
    pub rating: i16,
    pub cover_url: Option<String>,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create or full-replacement update request.
///
/// Every field is optional on the wire so that an absent title or status is
/// reported as a validation failure instead of a body decoding error. Status
/// and rating take any JSON value; a wrong-typed one fails validation, not
/// decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
    #[validate(required, length(min = 1))]
    pub genre: Option<String>,
    /// One of `want-to-read`, `reading`, `completed`
    #[schema(value_type = Option<String>)]
    pub status: Option<Value>,
    /// Required (1-5) when status is `completed`, ignored otherwise
    #[schema(value_type = Option<i64>)]
    pub rating: Option<Value>,
    pub cover_url: Option<String>,
    pub review: Option<String>,
}

/// Validated book fields, ready to be written to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: ReadingStatus,
    pub rating: i16,
    pub cover_url: Option<String>,
    pub review: Option<String>,
}

impl BookPayload {
    /// Check the payload and normalize it into a [`NewBook`].
    ///
    /// Checks run in a fixed order: required text fields, then status
    /// membership, then the completed-implies-rated rule. The rating of a
    /// book that is not completed is always reset to 0.
    pub fn into_new_book(self) -> AppResult<NewBook> {
        if self.validate().is_err() {
            return Err(AppError::MissingFields);
        }
        let (Some(title), Some(author), Some(genre)) = (self.title, self.author, self.genre) else {
            return Err(AppError::MissingFields);
        };

        let status: ReadingStatus = self
            .status
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .ok_or(AppError::InvalidStatus)?;

        let rating = match status {
            ReadingStatus::Completed => self
                .rating
                .as_ref()
                .and_then(Value::as_number)
                .and_then(whole_number)
                .filter(|r| (1..=5).contains(r))
                .map(|r| r as i16)
                .ok_or(AppError::InvalidRating)?,
            ReadingStatus::Reading | ReadingStatus::WantToRead => 0,
        };

        Ok(NewBook {
            title,
            author,
            genre,
            status,
            rating,
            cover_url: self.cover_url.filter(|s| !s.is_empty()),
            review: self.review.filter(|s| !s.is_empty()),
        })
    }
}

/// Integral value of a JSON number; `4` and `4.0` qualify, `4.5` does not
fn whole_number(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

impl From<&Book> for BookPayload {
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: Some(book.genre.clone()),
            status: Some(Value::from(book.status.as_str())),
            rating: Some(Value::from(book.rating)),
            cover_url: book.cover_url.clone(),
            review: book.review.clone(),
        }
    }
}
