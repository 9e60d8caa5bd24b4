use std::sync::Arc;

use crate::config::Config;
use crate::linkedin::fetcher::NameFetcher;
use crate::locations::resolver::HubResolver;
use crate::resumes::drive::ResumeDocs;
use crate::sheets::SheetStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. The external seams are trait objects so tests can run the
/// pipelines against in-memory backends.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetStore>,
    /// External tech-hub resolution for the location pipeline.
    pub resolver: Arc<dyn HubResolver>,
    /// Drive/Docs operations for the resume pipeline.
    pub drive: Arc<dyn ResumeDocs>,
    /// Profile page fetch for the LinkedIn pipeline.
    pub fetcher: Arc<dyn NameFetcher>,
    pub config: Config,
}
