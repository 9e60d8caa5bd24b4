//! Public profile page fetch and `<title>` name extraction.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{header, Client};
use tracing::debug;

/// `<title>Jane Doe | LinkedIn</title>` capture.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title>(.*?)\s*\|\s*LinkedIn</title>").expect("hardcoded regex")
});

/// Desktop browser User-Agent; LinkedIn serves bots a different page.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Seam for the page fetch so the batch runner is testable without a
/// network. Carried in `AppState` as `Arc<dyn NameFetcher>`.
#[async_trait]
pub trait NameFetcher: Send + Sync {
    /// Best-effort name lookup for a profile URL. `None` when the page is
    /// unavailable or carries no usable title.
    async fn fetch_name(&self, url: &str) -> Option<String>;
}

#[derive(Clone)]
pub struct ProfileFetcher {
    client: Client,
}

impl ProfileFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for ProfileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameFetcher for ProfileFetcher {
    async fn fetch_name(&self, url: &str) -> Option<String> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            debug!("Profile fetch for {url} returned {}", response.status());
            return None;
        }

        let body = response.text().await.ok()?;
        name_from_title(&body)
    }
}

/// Pulls the name out of a `… | LinkedIn` page title, rejecting not-found
/// pages.
pub fn name_from_title(html: &str) -> Option<String> {
    let captures = TITLE_RE.captures(html)?;
    let title = captures.get(1)?.as_str().trim();
    if title.is_empty() || title.contains("Page Not Found") {
        return None;
    }
    Some(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_title_extracts_name() {
        let html = "<html><head><title>Jane Doe | LinkedIn</title></head></html>";
        assert_eq!(name_from_title(html).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_from_title_is_case_insensitive_on_tags() {
        let html = "<HTML><TITLE>John Smith | LinkedIn</TITLE></HTML>";
        assert_eq!(name_from_title(html).as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_from_title_rejects_not_found_pages() {
        let html = "<title>Page Not Found | LinkedIn</title>";
        assert_eq!(name_from_title(html), None);
    }

    #[test]
    fn test_name_from_title_requires_linkedin_suffix() {
        let html = "<title>Jane Doe</title>";
        assert_eq!(name_from_title(html), None);
    }

    #[test]
    fn test_name_from_title_missing_title() {
        assert_eq!(name_from_title("<html><body>no title</body></html>"), None);
    }

    #[test]
    fn test_name_from_title_trims_whitespace() {
        let html = "<title>Jane Doe   |   LinkedIn</title>";
        assert_eq!(name_from_title(html).as_deref(), Some("Jane Doe"));
    }
}
