//! In-memory `SheetStore` used by the batch-runner tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SheetStore, SheetsError};

/// A sparse grid keyed by (sheet, column, row), with a write-call counter so
/// tests can assert idempotence (a re-run on a resolved sheet must not write).
#[derive(Default)]
pub struct InMemorySheet {
    cells: Mutex<HashMap<(String, String, u32), String>>,
    write_calls: Mutex<usize>,
}

impl InMemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, sheet: Option<&str>, column: &str, row: u32, value: &str) {
        self.cells
            .lock()
            .unwrap()
            .insert(key(sheet, column, row), value.to_string());
    }

    pub fn get(&self, sheet: Option<&str>, column: &str, row: u32) -> Option<String> {
        self.cells.lock().unwrap().get(&key(sheet, column, row)).cloned()
    }

    /// Number of write_column_block invocations observed.
    pub fn write_calls(&self) -> usize {
        *self.write_calls.lock().unwrap()
    }
}

fn key(sheet: Option<&str>, column: &str, row: u32) -> (String, String, u32) {
    (sheet.unwrap_or("").to_string(), column.to_string(), row)
}

#[async_trait]
impl SheetStore for InMemorySheet {
    async fn read_column(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
    ) -> Result<Vec<String>, SheetsError> {
        let cells = self.cells.lock().unwrap();
        let sheet_key = sheet.unwrap_or("");
        let last = cells
            .keys()
            .filter(|(s, c, _)| s.as_str() == sheet_key && c.as_str() == column)
            .map(|&(_, _, row)| row)
            .max();
        let Some(last) = last else {
            return Ok(Vec::new());
        };
        if last < start_row {
            return Ok(Vec::new());
        }
        Ok((start_row..=last)
            .map(|row| {
                cells
                    .get(&key(sheet, column, row))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect())
    }

    async fn write_column_block(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
        values: &[String],
    ) -> Result<(), SheetsError> {
        *self.write_calls.lock().unwrap() += 1;
        let mut cells = self.cells.lock().unwrap();
        for (i, value) in values.iter().enumerate() {
            cells.insert(key(sheet, column, start_row + i as u32), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_column_pads_gaps_with_blanks() {
        let sheet = InMemorySheet::new();
        sheet.set(None, "G", 2, "Austin, TX");
        sheet.set(None, "G", 5, "Denver, CO");

        let values = sheet.read_column(None, "G", 2).await.unwrap();
        assert_eq!(values, vec!["Austin, TX", "", "", "Denver, CO"]);
    }

    #[tokio::test]
    async fn test_read_empty_column() {
        let sheet = InMemorySheet::new();
        assert!(sheet.read_column(None, "G", 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_columns_and_sheets_are_isolated() {
        let sheet = InMemorySheet::new();
        sheet.set(None, "G", 2, "Austin, TX");
        sheet.set(Some("Applications"), "G", 2, "Boston, MA");

        let default_tab = sheet.read_column(None, "G", 2).await.unwrap();
        let named_tab = sheet.read_column(Some("Applications"), "G", 2).await.unwrap();
        assert_eq!(default_tab, vec!["Austin, TX"]);
        assert_eq!(named_tab, vec!["Boston, MA"]);
        assert!(sheet.read_column(None, "K", 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_cell_counts_as_one_call() {
        let sheet = InMemorySheet::new();
        sheet.write_cell(None, "K", 3, "Mountain View, CA").await.unwrap();
        assert_eq!(sheet.get(None, "K", 3).as_deref(), Some("Mountain View, CA"));
        assert_eq!(sheet.write_calls(), 1);
    }

    #[tokio::test]
    async fn test_write_column_block_lands_consecutively() {
        let sheet = InMemorySheet::new();
        let values = vec!["a".to_string(), "b".to_string()];
        sheet.write_column_block(None, "K", 4, &values).await.unwrap();
        assert_eq!(sheet.get(None, "K", 4).as_deref(), Some("a"));
        assert_eq!(sheet.get(None, "K", 5).as_deref(), Some("b"));
    }
}
