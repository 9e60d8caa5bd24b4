// Prompt constants for the LLM client. Each automation that needs an LLM
// call keeps its template here so the wording stays in one place.

/// Tech hub prompt. Replace `{location}` before sending. The answer format
/// is enforced downstream by the city/state validator, not trusted from the
/// model.
pub const TECH_HUB_PROMPT_TEMPLATE: &str = "Answer in the format: \"City, State\" \
    (e.g. San Jose, CA), no extra words. \
    Find a popular city, town, or suburb within 30 miles of \"{location}\" \
    Return only the location.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_location_placeholder() {
        assert!(TECH_HUB_PROMPT_TEMPLATE.contains("{location}"));
    }

    #[test]
    fn test_template_fill() {
        let prompt = TECH_HUB_PROMPT_TEMPLATE.replace("{location}", "Zurich, Switzerland");
        assert!(prompt.contains("Zurich, Switzerland"));
        assert!(!prompt.contains("{location}"));
    }
}
