//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, explore, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Liberia API",
        version = "0.1.0",
        description = "Personal book tracking REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Stats
        stats::get_summary,
        // Explore
        explore::search,
        explore::import_book,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::ReadingStatus,
            crate::api::MessageResponse,
            // Stats
            crate::services::stats::LibrarySummary,
            // Explore
            crate::models::catalog::CatalogBook,
            explore::CatalogSearchQuery,
            explore::CatalogSearchResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Reading list management"),
        (name = "stats", description = "Reading list statistics"),
        (name = "explore", description = "Open Library catalog search and import")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
