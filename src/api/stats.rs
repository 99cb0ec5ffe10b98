//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::LibrarySummary};

/// Reading list summary
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library summary", body = LibrarySummary)
    )
)]
pub async fn get_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<LibrarySummary>> {
    let summary = state.services.stats.summary().await?;
    Ok(Json(summary))
}
