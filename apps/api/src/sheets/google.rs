//! Google Sheets v4 values API backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{SheetStore, SheetsError};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Wire shape shared by reads and writes of the values API.
#[derive(Debug, Serialize, Deserialize)]
struct ValueRange {
    #[serde(rename = "majorDimension", skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct GoogleSheetStore {
    client: Client,
    spreadsheet_id: String,
    token: String,
}

impl GoogleSheetStore {
    pub fn new(spreadsheet_id: String, token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            spreadsheet_id,
            token,
        }
    }

    fn range(sheet: Option<&str>, a1: &str) -> String {
        match sheet {
            Some(name) => format!("{name}!{a1}"),
            None => a1.to_string(),
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!("{SHEETS_API_BASE}/{}/values/{range}", self.spreadsheet_id)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(SheetsError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Cells come back as JSON strings, numbers, or bools depending on the cell
/// format; everything is flattened to its display string.
fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl SheetStore for GoogleSheetStore {
    async fn read_column(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
    ) -> Result<Vec<String>, SheetsError> {
        // Open-ended A1 range ("G2:G") reads down to the last populated cell.
        let range = Self::range(sheet, &format!("{column}{start_row}:{column}"));
        let response = self
            .client
            .get(self.values_url(&range))
            .query(&[("majorDimension", "COLUMNS")])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let body: ValueRange = response.json().await?;

        let column_values = body.values.into_iter().next().unwrap_or_default();
        debug!("Read {} cells from {range}", column_values.len());
        Ok(column_values.iter().map(cell_text).collect())
    }

    async fn write_column_block(
        &self,
        sheet: Option<&str>,
        column: &str,
        start_row: u32,
        values: &[String],
    ) -> Result<(), SheetsError> {
        if values.is_empty() {
            return Ok(());
        }
        let end_row = start_row + values.len() as u32 - 1;
        let range = Self::range(sheet, &format!("{column}{start_row}:{column}{end_row}"));
        let body = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            values: values
                .iter()
                .map(|value| vec![Value::String(value.clone())])
                .collect(),
        };

        let response = self
            .client
            .put(self.values_url(&range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;

        debug!("Wrote {} cells to {range}", values.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_with_and_without_sheet_name() {
        assert_eq!(GoogleSheetStore::range(None, "G2:G"), "G2:G");
        assert_eq!(
            GoogleSheetStore::range(Some("Applications"), "I4:I6"),
            "Applications!I4:I6"
        );
    }

    #[test]
    fn test_cell_text_flattens_value_types() {
        assert_eq!(cell_text(&Value::String("Austin, TX".to_string())), "Austin, TX");
        assert_eq!(cell_text(&Value::from(42)), "42");
        assert_eq!(cell_text(&Value::Bool(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_value_range_deserializes_columns_response() {
        let json = r#"{
            "range": "Sheet1!G2:G1000",
            "majorDimension": "COLUMNS",
            "values": [["Austin, TX", "", "Seattle, WA"]]
        }"#;
        let body: ValueRange = serde_json::from_str(json).unwrap();
        assert_eq!(body.values.len(), 1);
        assert_eq!(body.values[0].len(), 3);
        assert_eq!(cell_text(&body.values[0][1]), "");
    }

    #[test]
    fn test_value_range_defaults_to_empty_when_column_is_blank() {
        // The API omits `values` entirely for an empty range.
        let body: ValueRange = serde_json::from_str(r#"{"range": "G2:G"}"#).unwrap();
        assert!(body.values.is_empty());
    }
}
