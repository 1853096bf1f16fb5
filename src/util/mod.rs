/// Characters of note content shown in a list row.
pub(crate) const CONTENT_PREVIEW_CHARS: usize = 100;

/// First `max` characters of `content`, with `...` appended when cut.
pub(crate) fn preview(content: &str, max: usize) -> String {
    let mut chars = content.char_indices();
    match chars.nth(max) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Calendar date part of a server timestamp (`2025-01-02T10:00:00` -> `2025-01-02`).
/// Anything that does not look like an ISO timestamp is returned as-is.
pub(crate) fn date_part(timestamp: &str) -> &str {
    let ts = timestamp.trim();
    match ts.split_once(|c: char| c == 'T' || c == ' ') {
        Some((date, _)) if date.len() == 10 => date,
        _ => ts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_content_untouched() {
        assert_eq!(preview("hello", 100), "hello");
        assert_eq!(preview("", 100), "");
    }

    #[test]
    fn test_preview_cuts_at_char_boundary() {
        let long = "a".repeat(150);
        let p = preview(&long, CONTENT_PREVIEW_CHARS);
        assert_eq!(p.len(), 103);
        assert!(p.ends_with("..."));

        // Multi-byte characters must not be split.
        let cjk = "笔记".repeat(60);
        let p = preview(&cjk, CONTENT_PREVIEW_CHARS);
        assert_eq!(p.chars().count(), 103);
    }

    #[test]
    fn test_preview_exact_length_has_no_ellipsis() {
        let exact = "b".repeat(100);
        assert_eq!(preview(&exact, 100), exact);
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-01-02T10:00:00"), "2025-01-02");
        assert_eq!(date_part("2025-01-02 10:00:00"), "2025-01-02");
        assert_eq!(date_part("yesterday"), "yesterday");
    }
}
