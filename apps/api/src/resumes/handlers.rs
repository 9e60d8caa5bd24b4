//! Axum route handlers for the resume generation run.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::run::ResumeSummary;
use crate::resumes::generator::generate_resumes;
use crate::state::AppState;

/// POST /api/v1/resumes/generate
///
/// Generates and shares resume copies for up to one batch of application
/// rows, then returns the run summary.
pub async fn handle_generate(
    State(state): State<AppState>,
) -> Result<Json<ResumeSummary>, AppError> {
    let summary = generate_resumes(
        state.sheets.as_ref(),
        state.drive.as_ref(),
        &state.config.resumes,
    )
    .await?;

    Ok(Json(summary))
}
