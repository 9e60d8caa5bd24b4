use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::GEMINI_API_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
///
/// Pipeline tunables live in the per-automation config structs below and are
/// passed into each pipeline at construction time; nothing reads them
/// ambiently.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub google_api_token: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub enhancer: EnhancerConfig,
    pub extractor: ExtractorConfig,
    pub resumes: ResumeConfig,
}

/// Tunables for the location enhancement run.
#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    /// Column holding the raw job location strings.
    pub location_column: String,
    /// Column the suggested tech hub is written to.
    pub output_column: String,
    pub start_row: u32,
    /// Rows per group; sized for the generative API's requests-per-minute cap.
    pub batch_size: usize,
    /// Pause after each generative API call within a group. Table and
    /// detector hits make no network call and incur no pause.
    pub api_delay: Duration,
    /// Pause between groups.
    pub batch_delay: Duration,
    /// Written whenever a row cannot be resolved to a real suggestion.
    pub default_location: String,
    pub gemini_api_url: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            location_column: "G".to_string(),
            output_column: "K".to_string(),
            start_row: 2,
            batch_size: 15,
            api_delay: Duration::from_millis(1000),
            batch_delay: Duration::from_millis(1000),
            default_location: "Los Angeles, CA".to_string(),
            gemini_api_url: GEMINI_API_URL.to_string(),
        }
    }
}

/// Tunables for the LinkedIn name extraction run.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub url_column: String,
    pub name_column: String,
    pub start_row: u32,
    /// Pause after each profile page fetch, success or failure.
    pub fetch_delay: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            url_column: "C".to_string(),
            name_column: "D".to_string(),
            start_row: 1,
            fetch_delay: Duration::from_millis(1000),
        }
    }
}

/// Tunables for the resume generation run.
#[derive(Debug, Clone)]
pub struct ResumeConfig {
    pub sheet_name: String,
    pub company_column: String,
    pub location_column: String,
    /// Column the generated document link (or an error marker) lands in.
    pub output_column: String,
    pub start_row: u32,
    /// Rows handled per run before stopping.
    pub batch_size: usize,
    /// Template document copied for every generated resume.
    pub template_doc_id: String,
    /// Copies are named `{company}_{copy_name_suffix}`.
    pub copy_name_suffix: String,
    /// Accounts granted writer access on every copy.
    pub share_emails: Vec<String>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Applications".to_string(),
            company_column: "F".to_string(),
            location_column: "K".to_string(),
            output_column: "I".to_string(),
            start_row: 4,
            batch_size: 35,
            template_doc_id: String::new(),
            copy_name_suffix: "Resume".to_string(),
            share_emails: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let enhancer = EnhancerConfig {
            batch_size: env_parse("ENHANCER_BATCH_SIZE", 15)?,
            api_delay: Duration::from_millis(env_parse("ENHANCER_API_DELAY_MS", 1000)?),
            batch_delay: Duration::from_millis(env_parse("ENHANCER_BATCH_DELAY_MS", 1000)?),
            default_location: env_or("DEFAULT_LOCATION", "Los Angeles, CA"),
            gemini_api_url: env_or("GEMINI_API_URL", GEMINI_API_URL),
            ..EnhancerConfig::default()
        };

        let resumes = ResumeConfig {
            template_doc_id: require_env("RESUME_TEMPLATE_DOC_ID")?,
            copy_name_suffix: env_or("RESUME_NAME_SUFFIX", "Resume"),
            share_emails: parse_share_emails(&env_or("RESUME_SHARE_EMAILS", "")),
            ..ResumeConfig::default()
        };

        Ok(Config {
            spreadsheet_id: require_env("SPREADSHEET_ID")?,
            google_api_token: require_env("GOOGLE_API_TOKEN")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: env_parse("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            enhancer,
            extractor: ExtractorConfig::default(),
            resumes,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' is not a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}

/// Splits a comma-separated email list, dropping empty segments.
fn parse_share_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_share_emails_splits_and_trims() {
        let emails = parse_share_emails("a@example.com, b@example.com ,c@example.com");
        assert_eq!(
            emails,
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );
    }

    #[test]
    fn test_parse_share_emails_empty_input() {
        assert!(parse_share_emails("").is_empty());
        assert!(parse_share_emails(" , ,").is_empty());
    }

    #[test]
    fn test_enhancer_defaults_match_rate_limits() {
        let config = EnhancerConfig::default();
        assert_eq!(config.batch_size, 15);
        assert_eq!(config.api_delay, Duration::from_millis(1000));
        assert_eq!(config.default_location, "Los Angeles, CA");
        assert_eq!(config.location_column, "G");
        assert_eq!(config.output_column, "K");
        assert_eq!(config.start_row, 2);
    }

    #[test]
    fn test_resume_defaults() {
        let config = ResumeConfig::default();
        assert_eq!(config.sheet_name, "Applications");
        assert_eq!(config.start_row, 4);
        assert_eq!(config.batch_size, 35);
    }
}
