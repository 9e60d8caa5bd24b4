//! Axum route handlers for the LinkedIn extraction run.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::linkedin::batch::extract_names;
use crate::models::run::ExtractSummary;
use crate::state::AppState;

/// POST /api/v1/linkedin/extract
///
/// Walks the URL column and fills the name column, then returns the run
/// summary. Rows that already have a name are left alone.
pub async fn handle_extract(
    State(state): State<AppState>,
) -> Result<Json<ExtractSummary>, AppError> {
    let summary = extract_names(
        state.sheets.as_ref(),
        state.fetcher.as_ref(),
        &state.config.extractor,
    )
    .await?;

    Ok(Json(summary))
}
