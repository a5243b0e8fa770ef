//! Small string helpers shared across modules.

/// Truncate a string to at most `max` characters.
///
/// The cutoff is hard, not word-boundary-aware. It counts characters rather
/// than bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// what was dropped appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 chars)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        s.to_string()
    } else {
        format!("{}…(+{} chars)", truncate_chars(s, max), total - max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_string() {
        assert_eq!(truncate_chars("kurz", 500), "kurz");
    }

    #[test]
    fn test_truncate_chars_exact_cutoff() {
        let s = "x".repeat(600);
        let result = truncate_chars(&s, 500);
        assert_eq!(result.len(), 500);
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        let s = "ü".repeat(10);
        let result = truncate_chars(&s, 4);
        assert_eq!(result, "üüüü");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 chars)"));
    }
}
