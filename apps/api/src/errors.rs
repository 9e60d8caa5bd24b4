use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::resumes::drive::DriveError;
use crate::sheets::SheetsError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only scan and write-back failures surface here; per-row resolution
/// failures are absorbed by the pipelines (default substitution or marker
/// strings) and never abort a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    #[error("Drive error: {0}")]
    Drive(#[from] DriveError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Sheets(e) => {
                tracing::error!("Sheets error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SHEETS_ERROR",
                    "A spreadsheet error occurred".to_string(),
                )
            }
            AppError::Drive(e) => {
                tracing::error!("Drive error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "DRIVE_ERROR",
                    "A document storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
