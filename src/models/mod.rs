//! Data models for Liberia

pub mod book;
pub mod catalog;

// Re-export commonly used types
pub use book::{Book, BookPayload, NewBook, ReadingStatus};
pub use catalog::{CatalogBook, CatalogSearchResult};
