//! Resume generation run.
//!
//! Flow per row: company present, no link yet -> copy template ->
//! replace the location placeholder -> share -> record the doc URL.
//! Rows without a location, and rows whose document operations fail, get a
//! marker string in the output cell instead; the run continues either way.
//! Results are written back grouped into consecutive-row blocks.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ResumeConfig;
use crate::errors::AppError;
use crate::models::run::ResumeSummary;
use crate::resumes::drive::{document_url, DriveError, ResumeDocs};
use crate::sheets::{group_consecutive, CellWrite, SheetStore};

/// Placeholder in the template document that receives the enhanced location.
const LOCATION_PLACEHOLDER: &str = "{{LOCATION}}";
/// Marker written when the row has no enhanced location yet.
const NO_LOCATION_MARKER: &str = "\u{274c} No location provided";

pub async fn generate_resumes(
    sheets: &dyn SheetStore,
    docs: &dyn ResumeDocs,
    config: &ResumeConfig,
) -> Result<ResumeSummary, AppError> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!("Run {run_id}: starting resume generation");

    let sheet = Some(config.sheet_name.as_str());
    let companies = sheets
        .read_column(sheet, &config.company_column, config.start_row)
        .await?;
    let locations = sheets
        .read_column(sheet, &config.location_column, config.start_row)
        .await?;
    let links = sheets
        .read_column(sheet, &config.output_column, config.start_row)
        .await?;

    let mut summary = ResumeSummary::new(run_id, started_at);
    let mut writes: Vec<CellWrite> = Vec::new();

    for (i, company) in companies.iter().enumerate() {
        let row = config.start_row + i as u32;
        let company = company.trim();

        if company.is_empty() {
            summary.skipped_no_company += 1;
            continue;
        }
        let existing = links.get(i).map(|link| link.trim()).unwrap_or("");
        if !existing.is_empty() {
            summary.skipped_existing += 1;
            continue;
        }

        let location = locations.get(i).map(|loc| loc.trim()).unwrap_or("");
        if location.is_empty() {
            writes.push(CellWrite {
                row,
                value: NO_LOCATION_MARKER.to_string(),
            });
            summary.missing_location += 1;
        } else {
            match create_resume(docs, config, company, location).await {
                Ok(url) => {
                    info!("Row {row}: generated resume for {company}");
                    writes.push(CellWrite { row, value: url });
                    summary.generated += 1;
                }
                Err(error) => {
                    warn!("Row {row}: resume generation for {company} failed: {error}");
                    writes.push(CellWrite {
                        row,
                        value: format!("\u{274c} Error: {error}"),
                    });
                    summary.errors += 1;
                }
            }
        }

        summary.processed += 1;
        if summary.processed >= config.batch_size {
            info!("Run {run_id}: batch limit of {} reached", config.batch_size);
            break;
        }
    }

    for block in group_consecutive(&writes) {
        sheets
            .write_column_block(sheet, &config.output_column, block.start_row, &block.values)
            .await?;
    }

    let summary = summary.finished();
    info!(
        "Run {run_id}: resume generation complete ({} generated, {} errors, \
        {} missing location, {} already linked)",
        summary.generated, summary.errors, summary.missing_location, summary.skipped_existing
    );
    Ok(summary)
}

/// Copy, fill, share; returns the edit URL of the new document.
async fn create_resume(
    docs: &dyn ResumeDocs,
    config: &ResumeConfig,
    company: &str,
    location: &str,
) -> Result<String, DriveError> {
    let copy_name = format!("{}_{}", company, config.copy_name_suffix);
    let document_id = docs.copy_file(&config.template_doc_id, &copy_name).await?;

    docs.replace_text(&document_id, LOCATION_PLACEHOLDER, location)
        .await?;

    for email in &config.share_emails {
        docs.share_with(&document_id, email).await?;
    }

    Ok(document_url(&document_id))
}
