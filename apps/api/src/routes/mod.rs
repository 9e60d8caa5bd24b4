pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::linkedin::handlers as linkedin_handlers;
use crate::locations::handlers as location_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/locations/enhance",
            post(location_handlers::handle_enhance),
        )
        .route(
            "/api/v1/linkedin/extract",
            post(linkedin_handlers::handle_extract),
        )
        .route(
            "/api/v1/resumes/generate",
            post(resume_handlers::handle_generate),
        )
        .with_state(state)
}
