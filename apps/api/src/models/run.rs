//! Run summaries returned by the automation endpoints.
//!
//! These carry the same counters the original completion reports surfaced,
//! with a run id and timing for log correlation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Result of one location enhancement run.
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub rows_pending: usize,
    pub rows_written: usize,
    /// Remote/generic rows resolved to the fixed default.
    pub remote_defaults: usize,
    /// Exact hits in the static city mappings.
    pub table_hits: usize,
    /// Real answers from the generative API.
    pub api_answers: usize,
    /// API rows that fell back to the default.
    pub api_fallbacks: usize,
    pub duration_ms: u64,
}

impl EnhanceSummary {
    pub fn new(run_id: Uuid, started_at: DateTime<Utc>, rows_pending: usize) -> Self {
        Self {
            run_id,
            started_at,
            rows_pending,
            rows_written: 0,
            remote_defaults: 0,
            table_hits: 0,
            api_answers: 0,
            api_fallbacks: 0,
            duration_ms: 0,
        }
    }

    pub fn finished(mut self) -> Self {
        self.duration_ms = elapsed_ms(self.started_at);
        self
    }
}

/// Result of one LinkedIn name extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub processed: usize,
    /// Names derived locally from hyphenated profile paths.
    pub by_hyphen: usize,
    /// Names pulled from a fetched profile page title.
    pub by_fetch: usize,
    pub not_found: usize,
    pub invalid_urls: usize,
    /// Blank cells and rows that already had a name.
    pub skipped: usize,
    pub duration_ms: u64,
}

impl ExtractSummary {
    pub fn new(run_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            started_at,
            processed: 0,
            by_hyphen: 0,
            by_fetch: 0,
            not_found: 0,
            invalid_urls: 0,
            skipped: 0,
            duration_ms: 0,
        }
    }

    pub fn finished(mut self) -> Self {
        self.duration_ms = elapsed_ms(self.started_at);
        self
    }
}

/// Result of one resume generation run.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub processed: usize,
    pub generated: usize,
    /// Rows that already carried a document link.
    pub skipped_existing: usize,
    /// Rows without a company name.
    pub skipped_no_company: usize,
    /// Rows marked with the missing-location sentinel.
    pub missing_location: usize,
    /// Rows marked with an error sentinel.
    pub errors: usize,
    pub duration_ms: u64,
}

impl ResumeSummary {
    pub fn new(run_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            started_at,
            processed: 0,
            generated: 0,
            skipped_existing: 0,
            skipped_no_company: 0,
            missing_location: 0,
            errors: 0,
            duration_ms: 0,
        }
    }

    pub fn finished(mut self) -> Self {
        self.duration_ms = elapsed_ms(self.started_at);
        self
    }
}

fn elapsed_ms(started_at: DateTime<Utc>) -> u64 {
    (Utc::now() - started_at).num_milliseconds().max(0) as u64
}
