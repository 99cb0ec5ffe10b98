//! External catalog (Open Library) documents

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::book::{BookPayload, ReadingStatus};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const DEFAULT_GENRE: &str = "General";

/// Open Library cover image sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CoverSize {
    fn suffix(&self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

/// Cover image URL for an Open Library cover id
pub fn cover_url(covers_base: &str, cover_id: i64, size: CoverSize) -> String {
    format!(
        "{}/b/id/{}-{}.jpg",
        covers_base.trim_end_matches('/'),
        cover_id,
        size.suffix()
    )
}

/// A search result document, as returned by `search.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogBook {
    /// Work key, e.g. `/works/OL45804W`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub isbn: Option<Vec<String>>,
    /// Numeric cover id
    pub cover_i: Option<i64>,
    pub subject: Option<Vec<String>>,
    /// Medium cover URL computed from `cover_i`; never read from the catalog
    #[serde(rename = "coverUrl", default, skip_deserializing)]
    pub cover_url: Option<String>,
}

impl CatalogBook {
    pub fn first_author(&self) -> &str {
        self.author_name
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn first_subject(&self) -> &str {
        self.subject
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_GENRE)
    }

    /// Fill in `cover_url` from `cover_i`
    pub fn with_cover_url(mut self, covers_base: &str) -> Self {
        self.cover_url = self
            .cover_i
            .map(|id| cover_url(covers_base, id, CoverSize::Medium));
        self
    }

    /// Shape an import request for this document: new entries start on the
    /// want-to-read shelf with no rating and no review.
    pub fn to_payload(&self, covers_base: &str) -> BookPayload {
        BookPayload {
            title: Some(self.title.clone()),
            author: Some(self.first_author().to_string()),
            genre: Some(self.first_subject().to_string()),
            status: Some(Value::from(ReadingStatus::WantToRead.as_str())),
            rating: Some(Value::from(0)),
            cover_url: self
                .cover_i
                .map(|id| cover_url(covers_base, id, CoverSize::Medium)),
            review: None,
        }
    }
}

/// `search.json` response body (only the fields we use)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSearchResult {
    #[serde(default, rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<CatalogBook>,
}
