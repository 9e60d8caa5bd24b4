//! "City, State" shape validation for generative-API answers.

/// Checks that a candidate answer looks like `City, State`.
///
/// Valid iff, on the trimmed text: total length in [5, 50]; exactly one
/// comma; both sides non-empty after trimming; the state side longer than
/// one character and at most twenty.
pub fn is_valid_city_state(text: &str) -> bool {
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len > 50 || len < 5 {
        return false;
    }

    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 2 {
        return false;
    }

    let city = parts[0].trim();
    let state = parts[1].trim();
    if city.is_empty() || state.is_empty() {
        return false;
    }

    let state_len = state.chars().count();
    if state_len == 1 || state_len > 20 {
        return false;
    }

    true
}
