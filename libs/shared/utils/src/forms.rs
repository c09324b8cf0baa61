//! Coercion applied to every form field before it leaves for the clinic service.

/// Empty (or whitespace-only) input means "not provided".
pub fn normalize_optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Reads the leading integer of a numeric field ("42", " 42 years").
/// Zero, negatives and non-numeric input count as "not provided".
pub fn parse_optional_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|&(idx, c)| !(c.is_ascii_digit() || (idx == 0 && (c == '+' || c == '-'))))
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
}
