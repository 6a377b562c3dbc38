//! Small string helpers shared by the query layer and logging.

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// This is how visible text is normalized after concatenating an element's
/// text nodes, so `"\n  Bird\n   Walk "` becomes `"Bird Walk"`.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```
/// use nparks_scraper::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(20), 10), "aaaaaaaaaa…(+10 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Bird\n\t  Walk  "), "Bird Walk");
        assert_eq!(collapse_whitespace("single"), "single");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        // 'é' is two bytes; cutting at 1 would split it
        let result = truncate_for_log("éé", 1);
        assert_eq!(result, "…(+4 bytes)");
    }
}
