//! External catalog endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{book::Book, catalog::CatalogBook},
};

use super::{JsonBody, QueryParams};

/// Catalog search query parameters
#[derive(Deserialize, IntoParams, ToSchema, Debug)]
pub struct CatalogSearchQuery {
    /// Free-text search term (defaults to the configured query)
    pub q: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct CatalogSearchResponse {
    /// Query that was sent to the catalog
    pub query: String,
    /// Total matches reported by the catalog
    pub total: u64,
    /// Returned documents
    pub items: Vec<CatalogBook>,
}

/// Search the Open Library catalog
#[utoipa::path(
    get,
    path = "/explore/search",
    tag = "explore",
    params(CatalogSearchQuery),
    responses(
        (status = 200, description = "Search results", body = CatalogSearchResponse),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 502, description = "Catalog unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    QueryParams(query): QueryParams<CatalogSearchQuery>,
) -> AppResult<Json<CatalogSearchResponse>> {
    let result = state
        .services
        .explore
        .search(query.q.as_deref(), query.limit)
        .await?;

    Ok(Json(CatalogSearchResponse {
        query: result.query,
        total: result.total,
        items: result.items,
    }))
}

/// Add a catalog search result to the library
#[utoipa::path(
    post,
    path = "/explore/import",
    tag = "explore",
    request_body = CatalogBook,
    responses(
        (status = 201, description = "Book added to the library", body = Book),
        (status = 400, description = "Document cannot be imported", body = crate::error::ErrorResponse)
    )
)]
pub async fn import_book(
    State(state): State<crate::AppState>,
    JsonBody(doc): JsonBody<CatalogBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.explore.import(&doc).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
