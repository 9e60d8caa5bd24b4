//! External tech-hub resolution backed by the Gemini client.
//!
//! The resolver is best-effort with a hard never-fail contract: every call
//! produces a `HubResolution`, and every failure class is folded into
//! `Defaulted` with its reason preserved, so callers and tests can tell a
//! real answer from a substituted default.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::TECH_HUB_PROMPT_TEMPLATE;
use crate::llm_client::{LlmClient, LlmError};
use crate::locations::validator::is_valid_city_state;

/// Why a row fell back to the configured default location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The API answered with a non-success status.
    HttpStatus(u16),
    /// The response body did not carry the expected candidate text.
    MalformedResponse,
    /// The model answered, but not in `City, State` shape.
    InvalidFormat,
    /// Transport-level failure (timeout, DNS, connection).
    Network,
}

/// Outcome of resolving one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubResolution {
    /// Fixed default: the input is a remote or generic designation.
    RemoteDefault,
    /// Exact hit in the static city mappings.
    Mapped(String),
    /// The generative API produced a valid `City, State` answer.
    Suggested(String),
    /// Best-effort fallback to the default location.
    Defaulted(FallbackReason),
}

impl HubResolution {
    /// Materializes the final cell text, substituting the configured
    /// default for fixed-default and fallback outcomes.
    pub fn into_text(self, default_location: &str) -> String {
        match self {
            HubResolution::Mapped(city) | HubResolution::Suggested(city) => city,
            HubResolution::RemoteDefault | HubResolution::Defaulted(_) => {
                default_location.to_string()
            }
        }
    }

    /// True when this outcome came from the external API (answer or
    /// fallback). Drives the rate-limit pause in the batch runner.
    pub fn used_api(&self) -> bool {
        matches!(
            self,
            HubResolution::Suggested(_) | HubResolution::Defaulted(_)
        )
    }
}

/// Seam for the external call so the batch runner is testable without a
/// network. Carried in `AppState` as `Arc<dyn HubResolver>`.
#[async_trait]
pub trait HubResolver: Send + Sync {
    /// One best-effort API resolution. Never errors.
    async fn resolve(&self, raw_location: &str) -> HubResolution;
}

pub struct GeminiHubResolver {
    llm: LlmClient,
}

impl GeminiHubResolver {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl HubResolver for GeminiHubResolver {
    async fn resolve(&self, raw_location: &str) -> HubResolution {
        let prompt = TECH_HUB_PROMPT_TEMPLATE.replace("{location}", raw_location);

        match self.llm.generate(&prompt).await {
            Ok(answer) => vet_answer(raw_location, answer),
            Err(error) => {
                warn!("Gemini API error for {raw_location:?}: {error}");
                HubResolution::Defaulted(classify_llm_error(&error))
            }
        }
    }
}

/// A model answer counts only if it passes the format validator; anything
/// else is a fallback, never written through as-is.
fn vet_answer(raw_location: &str, answer: String) -> HubResolution {
    if is_valid_city_state(&answer) {
        HubResolution::Suggested(answer)
    } else {
        warn!("Invalid format from API for {raw_location:?}: {answer:?}. Using default.");
        HubResolution::Defaulted(FallbackReason::InvalidFormat)
    }
}

fn classify_llm_error(error: &LlmError) -> FallbackReason {
    match error {
        LlmError::Api { status, .. } => FallbackReason::HttpStatus(*status),
        LlmError::EmptyContent => FallbackReason::MalformedResponse,
        LlmError::Http(e) if e.is_decode() => FallbackReason::MalformedResponse,
        LlmError::Http(_) => FallbackReason::Network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text_keeps_real_answers() {
        let resolution = HubResolution::Suggested("Winterthur, ZH".to_string());
        assert_eq!(resolution.into_text("Los Angeles, CA"), "Winterthur, ZH");

        let resolution = HubResolution::Mapped("Tacoma, WA".to_string());
        assert_eq!(resolution.into_text("Los Angeles, CA"), "Tacoma, WA");
    }

    #[test]
    fn test_into_text_substitutes_default_for_fallbacks() {
        let resolution = HubResolution::Defaulted(FallbackReason::HttpStatus(500));
        assert_eq!(resolution.into_text("Los Angeles, CA"), "Los Angeles, CA");

        assert_eq!(
            HubResolution::RemoteDefault.into_text("Los Angeles, CA"),
            "Los Angeles, CA"
        );
    }

    #[test]
    fn test_used_api_only_for_external_outcomes() {
        assert!(HubResolution::Suggested("Austin, TX".to_string()).used_api());
        assert!(HubResolution::Defaulted(FallbackReason::Network).used_api());
        assert!(!HubResolution::RemoteDefault.used_api());
        assert!(!HubResolution::Mapped("Austin, TX".to_string()).used_api());
    }

    #[test]
    fn test_vet_answer_accepts_city_state() {
        let resolution = vet_answer("Zurich, Switzerland", "Winterthur, ZH".to_string());
        assert_eq!(
            resolution,
            HubResolution::Suggested("Winterthur, ZH".to_string())
        );
    }

    #[test]
    fn test_vet_answer_rejects_chatty_output() {
        let answer = "Sure! A popular city near Zurich would be Winterthur, ZH".to_string();
        assert_eq!(
            vet_answer("Zurich, Switzerland", answer),
            HubResolution::Defaulted(FallbackReason::InvalidFormat)
        );
    }

    #[test]
    fn test_vet_answer_rejects_bare_city() {
        assert_eq!(
            vet_answer("Zurich, Switzerland", "Winterthur".to_string()),
            HubResolution::Defaulted(FallbackReason::InvalidFormat)
        );
    }

    #[test]
    fn test_classify_api_status() {
        let error = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(classify_llm_error(&error), FallbackReason::HttpStatus(503));
    }

    #[test]
    fn test_classify_empty_content() {
        assert_eq!(
            classify_llm_error(&LlmError::EmptyContent),
            FallbackReason::MalformedResponse
        );
    }
}
