//! Axum route handlers for the location enhancement run.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::locations::batch::enhance_locations;
use crate::models::run::EnhanceSummary;
use crate::state::AppState;

/// POST /api/v1/locations/enhance
///
/// Runs the enhancement over all pending rows and returns the run summary.
/// Re-running on an already-resolved sheet is a no-op.
pub async fn handle_enhance(
    State(state): State<AppState>,
) -> Result<Json<EnhanceSummary>, AppError> {
    let summary = enhance_locations(
        state.sheets.as_ref(),
        state.resolver.as_ref(),
        &state.config.enhancer,
    )
    .await?;

    Ok(Json(summary))
}
