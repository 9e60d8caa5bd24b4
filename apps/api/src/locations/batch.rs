//! Location enhancement run: scan, group, resolve, write back.
//!
//! Rows are processed strictly in scan order, one at a time. Only external
//! API resolutions incur the per-call pause; table and detector hits are
//! free. Each group's results are written back before the next group
//! starts, with a pause between groups for the API rate limit.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EnhancerConfig;
use crate::errors::AppError;
use crate::locations::detector::is_remote_or_generic;
use crate::locations::mappings;
use crate::locations::resolver::{HubResolution, HubResolver};
use crate::models::run::EnhanceSummary;
use crate::sheets::{group_consecutive, pending_rows, CellWrite, SheetStore};

pub async fn enhance_locations(
    sheets: &dyn SheetStore,
    resolver: &dyn HubResolver,
    config: &EnhancerConfig,
) -> Result<EnhanceSummary, AppError> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!("Run {run_id}: starting location enhancement");

    let inputs = sheets
        .read_column(None, &config.location_column, config.start_row)
        .await?;
    let outputs = sheets
        .read_column(None, &config.output_column, config.start_row)
        .await?;
    let pending = pending_rows(&inputs, &outputs, config.start_row);

    let mut summary = EnhanceSummary::new(run_id, started_at, pending.len());

    if pending.is_empty() {
        info!("Run {run_id}: no rows need processing");
        return Ok(summary.finished());
    }
    info!("Run {run_id}: found {} locations to process", pending.len());

    let group_count = pending.len().div_ceil(config.batch_size);

    for (group_index, group) in pending.chunks(config.batch_size).enumerate() {
        info!(
            "Run {run_id}: processing batch {}/{group_count} ({} rows)",
            group_index + 1,
            group.len()
        );

        let mut writes = Vec::with_capacity(group.len());
        for (row_index, row) in group.iter().enumerate() {
            let resolution = resolve_row(resolver, &row.raw_text).await;

            match &resolution {
                HubResolution::RemoteDefault => {
                    summary.remote_defaults += 1;
                    info!("Row {}: {:?} -> default", row.row, row.raw_text);
                }
                HubResolution::Mapped(city) => {
                    summary.table_hits += 1;
                    info!("Row {}: {:?} -> mapped: {city}", row.row, row.raw_text);
                }
                HubResolution::Suggested(city) => {
                    summary.api_answers += 1;
                    info!("Row {}: {:?} -> API: {city}", row.row, row.raw_text);
                }
                HubResolution::Defaulted(reason) => {
                    summary.api_fallbacks += 1;
                    warn!(
                        "Row {}: {:?} fell back to default ({reason:?})",
                        row.row, row.raw_text
                    );
                }
            }

            let used_api = resolution.used_api();
            writes.push(CellWrite {
                row: row.row,
                value: resolution.into_text(&config.default_location),
            });

            if used_api && row_index + 1 < group.len() {
                tokio::time::sleep(config.api_delay).await;
            }
        }

        for block in group_consecutive(&writes) {
            sheets
                .write_column_block(None, &config.output_column, block.start_row, &block.values)
                .await?;
        }
        summary.rows_written += writes.len();

        if group_index + 1 < group_count {
            tokio::time::sleep(config.batch_delay).await;
        }
    }

    let summary = summary.finished();
    info!(
        "Run {run_id}: enhancement complete, {} rows written",
        summary.rows_written
    );
    Ok(summary)
}

/// Priority order: detector, then static table, then the external API.
async fn resolve_row(resolver: &dyn HubResolver, raw_text: &str) -> HubResolution {
    if is_remote_or_generic(raw_text) {
        return HubResolution::RemoteDefault;
    }
    if let Some(city) = mappings::suggest(raw_text) {
        return HubResolution::Mapped(city.to_string());
    }
    resolver.resolve(raw_text).await
}
