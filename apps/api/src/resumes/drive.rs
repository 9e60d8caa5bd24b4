//! Google Drive v3 and Docs v1 REST operations used by the resume pipeline.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
const DOCS_API_BASE: &str = "https://docs.googleapis.com/v1";

#[derive(Debug, Error)]
pub enum DriveError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Seam for the document operations so the generator is testable without a
/// network. Carried in `AppState` as `Arc<dyn ResumeDocs>`.
#[async_trait]
pub trait ResumeDocs: Send + Sync {
    /// Copies `file_id` under `name`, returning the new file id.
    async fn copy_file(&self, file_id: &str, name: &str) -> Result<String, DriveError>;

    /// Replaces every occurrence of `placeholder` in the document.
    async fn replace_text(
        &self,
        document_id: &str,
        placeholder: &str,
        replacement: &str,
    ) -> Result<(), DriveError>;

    /// Grants writer access to `email`.
    async fn share_with(&self, file_id: &str, email: &str) -> Result<(), DriveError>;
}

#[derive(Debug, Deserialize)]
struct CopyResponse {
    id: String,
}

#[derive(Clone)]
pub struct DriveClient {
    client: Client,
    token: String,
}

impl DriveClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            token,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DriveError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(DriveError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ResumeDocs for DriveClient {
    async fn copy_file(&self, file_id: &str, name: &str) -> Result<String, DriveError> {
        let response = self
            .client
            .post(format!("{DRIVE_API_BASE}/files/{file_id}/copy"))
            .bearer_auth(&self.token)
            .json(&json!({ "name": name }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let copy: CopyResponse = response.json().await?;

        debug!("Copied {file_id} -> {} ({name})", copy.id);
        Ok(copy.id)
    }

    async fn replace_text(
        &self,
        document_id: &str,
        placeholder: &str,
        replacement: &str,
    ) -> Result<(), DriveError> {
        let body = json!({
            "requests": [{
                "replaceAllText": {
                    "containsText": { "text": placeholder, "matchCase": true },
                    "replaceText": replacement,
                }
            }]
        });

        let response = self
            .client
            .post(format!("{DOCS_API_BASE}/documents/{document_id}:batchUpdate"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn share_with(&self, file_id: &str, email: &str) -> Result<(), DriveError> {
        let body = json!({
            "role": "writer",
            "type": "user",
            "emailAddress": email,
        });

        let response = self
            .client
            .post(format!("{DRIVE_API_BASE}/files/{file_id}/permissions"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;

        debug!("Shared {file_id} with {email}");
        Ok(())
    }
}

/// Edit URL for a generated document.
pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}/edit")
}
