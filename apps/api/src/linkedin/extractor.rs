//! LinkedIn URL parsing and local name derivation.

use std::sync::LazyLock;

use regex::Regex;

/// `linkedin.com/in/<path>` capture; the path stops at `/` or a query.
static PROFILE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/([^/?]+)").expect("hardcoded regex"));

/// Trailing hexadecimal id segment, e.g. `-540a831a0`.
static TRAILING_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[0-9a-f]+/?$").expect("hardcoded regex"));

pub fn is_linkedin_url(url: &str) -> bool {
    url.to_lowercase().contains("linkedin.com/in/")
}

/// Extracts the profile path segment from a LinkedIn URL.
pub fn profile_path(url: &str) -> Option<&str> {
    PROFILE_PATH_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Derives a display name from a hyphenated profile path: strips the
/// trailing id segment, capitalizes each hyphen-separated part, joins with
/// spaces.
pub fn name_from_hyphenated_path(path: &str) -> String {
    let without_id = TRAILING_ID_RE.replace(path, "");
    without_id
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
