//! LinkedIn extraction run: walk the URL column, derive or fetch names,
//! write results and sentinels back row by row.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::ExtractorConfig;
use crate::errors::AppError;
use crate::linkedin::extractor::{is_linkedin_url, name_from_hyphenated_path, profile_path};
use crate::linkedin::fetcher::NameFetcher;
use crate::models::run::ExtractSummary;
use crate::sheets::SheetStore;

/// Sentinel written for cells that are not usable profile URLs.
const INVALID_URL: &str = "Invalid URL";
/// Sentinel written when the profile page yields no name.
const NAME_NOT_FOUND: &str = "Name Not Found";

pub async fn extract_names(
    sheets: &dyn SheetStore,
    fetcher: &dyn NameFetcher,
    config: &ExtractorConfig,
) -> Result<ExtractSummary, AppError> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!("Run {run_id}: starting LinkedIn name extraction");

    let urls = sheets
        .read_column(None, &config.url_column, config.start_row)
        .await?;
    let mut summary = ExtractSummary::new(run_id, started_at);

    if urls.is_empty() {
        info!("Run {run_id}: no URLs found in column {}", config.url_column);
        return Ok(summary.finished());
    }

    let names = sheets
        .read_column(None, &config.name_column, config.start_row)
        .await?;

    for (i, url) in urls.iter().enumerate() {
        let row = config.start_row + i as u32;
        let url = url.trim();
        let existing = names.get(i).map(|name| name.trim()).unwrap_or("");

        // Empty cells are skipped silently; non-URL content is marked.
        if url.is_empty() {
            summary.skipped += 1;
            continue;
        }
        if !is_linkedin_url(url) {
            sheets
                .write_cell(None, &config.name_column, row, INVALID_URL)
                .await?;
            summary.invalid_urls += 1;
            continue;
        }

        if !existing.is_empty() {
            summary.skipped += 1;
            continue;
        }

        let Some(path) = profile_path(url) else {
            sheets
                .write_cell(None, &config.name_column, row, INVALID_URL)
                .await?;
            summary.invalid_urls += 1;
            continue;
        };

        if path.contains('-') {
            // Hyphenated path: the name is derivable locally, no fetch.
            let name = name_from_hyphenated_path(path);
            info!("Row {row}: {url} -> {name} (from path)");
            sheets
                .write_cell(None, &config.name_column, row, &name)
                .await?;
            summary.by_hyphen += 1;
        } else {
            // Single-word username: the page title is the only source.
            match fetcher.fetch_name(url).await {
                Some(name) => {
                    info!("Row {row}: {url} -> {name} (from page)");
                    sheets
                        .write_cell(None, &config.name_column, row, &name)
                        .await?;
                    summary.by_fetch += 1;
                }
                None => {
                    info!("Row {row}: {url} -> name not found");
                    sheets
                        .write_cell(None, &config.name_column, row, NAME_NOT_FOUND)
                        .await?;
                    summary.not_found += 1;
                }
            }
            // Rate-limit pause applies to every fetch, success or failure.
            tokio::time::sleep(config.fetch_delay).await;
        }

        summary.processed += 1;
    }

    let summary = summary.finished();
    info!(
        "Run {run_id}: extraction complete ({} processed, {} by hyphen, {} by fetch, \
        {} not found, {} invalid, {} skipped)",
        summary.processed,
        summary.by_hyphen,
        summary.by_fetch,
        summary.not_found,
        summary.invalid_urls,
        summary.skipped
    );
    Ok(summary)
}
