//! Spreadsheet access seam shared by all three automations.
//!
//! The pipelines depend on the `SheetStore` trait, carried in `AppState` as
//! `Arc<dyn SheetStore>`, so the batch runners are testable against an
//! in-memory grid. The production backend is the Sheets v4 values API.

pub mod google;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the spreadsheet backend.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A row whose input cell is populated and whose output cell is still blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub row: u32,
    pub raw_text: String,
}

/// One output cell value destined for a specific row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellWrite {
    pub row: u32,
    pub value: String,
}

/// A run of consecutive-row writes, collapsed into a single ranged update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteBlock {
    pub start_row: u32,
    pub values: Vec<String>,
}

/// Column-oriented spreadsheet access. `sheet` is `None` for the active
/// (first) sheet, or a named tab like `Applications`.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Reads `column` from `start_row` down to its last populated cell.
    /// Blank cells inside the range come back as empty strings; an empty
    /// column yields an empty vec.
    async fn read_column(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
    ) -> Result<Vec<String>, SheetsError>;

    /// Writes a vertical run of consecutive cells starting at `start_row`.
    async fn write_column_block(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
        values: &[String],
    ) -> Result<(), SheetsError>;

    /// Writes a single cell.
    async fn write_cell(
        &self,
        sheet: Option<&str>,
        column: &str,
        row: u32,
        value: &str,
    ) -> Result<(), SheetsError> {
        let values = [value.to_string()];
        self.write_column_block(sheet, column, row, &values).await
    }
}

/// Pairs an input column scan against the output column, collecting rows
/// that still need processing. Cells are matched by position; the shorter
/// column reads as blank past its end. Rows whose output is already
/// populated are skipped, which is what makes re-runs idempotent.
pub fn pending_rows(inputs: &[String], outputs: &[String], start_row: u32) -> Vec<PendingRow> {
    let mut pending = Vec::new();
    for (i, input) in inputs.iter().enumerate() {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let output = outputs.get(i).map(|s| s.trim()).unwrap_or("");
        if !output.is_empty() {
            continue;
        }
        pending.push(PendingRow {
            row: start_row + i as u32,
            raw_text: input.to_string(),
        });
    }
    pending
}

/// Collapses ordered writes into consecutive-row blocks so a batch lands in
/// as few ranged updates as the row layout allows.
pub fn group_consecutive(writes: &[CellWrite]) -> Vec<WriteBlock> {
    let mut blocks: Vec<WriteBlock> = Vec::new();
    for write in writes {
        match blocks.last_mut() {
            Some(block) if block.start_row + block.values.len() as u32 == write.row => {
                block.values.push(write.value.clone());
            }
            _ => blocks.push(WriteBlock {
                start_row: write.row,
                values: vec![write.value.clone()],
            }),
        }
    }
    blocks
}
