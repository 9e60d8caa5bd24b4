//! Remote/generic location detection.

/// Substrings denoting remote or overly generic work locations. Rows
/// matching any of these resolve straight to the default location.
const REMOTE_KEYWORDS: &[&str] = &[
    "remote",
    "usa",
    "united states",
    "remote, usa",
    "remote, united states",
];

/// Case-insensitive substring containment against the keyword set.
pub fn is_remote_or_generic(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    REMOTE_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}
