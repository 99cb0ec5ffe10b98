//! Liberia Book Tracking Server
//!
//! A REST JSON API for a personal reading list: books with a reading
//! status, ratings and reviews for completed books, and import from the
//! Open Library catalog.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
