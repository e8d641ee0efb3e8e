//! Turns multi-line free text into clean item lists.

/// Token returned by [`pick_items`] when a field has no items.
pub const NONE_TOKEN: &str = "none";

/// Bullet character users commonly paste from word processors.
const BULLET: char = '•';

fn is_marker(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == BULLET
}

/// Line boundaries, including the form feed, the ASCII separators and the
/// Unicode line/paragraph separators. `\r\n` yields an empty segment between
/// its halves, which is dropped with the other blank lines.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'..='\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split free text into items, one per non-blank line.
///
/// Leading and trailing whitespace, hyphens and bullets are trimmed from
/// every line and lines that end up empty are dropped. Order and duplicates
/// are kept. Accepts either `&str` or `Option<&str>`.
///
/// # Example
///
/// ```
/// use handover::text::clean_lines;
///
/// assert_eq!(clean_lines("- a\n• b \n \n c"), vec!["a", "b", "c"]);
/// assert!(clean_lines(None).is_empty());
/// ```
pub fn clean_lines<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(text) = text.into() else {
        return Vec::new();
    };

    text.split(is_line_break)
        .map(|line| line.trim_matches(is_marker))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Condense a field to its first `n` items joined with `"; "`.
///
/// Returns [`NONE_TOKEN`] when the field has no items.
pub fn pick_items<'a>(text: impl Into<Option<&'a str>>, n: usize) -> String {
    let items = clean_lines(text);
    if items.is_empty() {
        return NONE_TOKEN.to_string();
    }
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty() {
        assert!(clean_lines("").is_empty());
        assert!(clean_lines(None).is_empty());
        assert!(clean_lines(" \n\t\n").is_empty());
    }

    #[test]
    fn test_clean_strips_markers() {
        assert_eq!(clean_lines("- a\n• b \n \n c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clean_keeps_inner_hyphens() {
        assert_eq!(
            clean_lines("-- follow-up at 09:00 --"),
            vec!["follow-up at 09:00"]
        );
    }

    #[test]
    fn test_clean_marker_only_lines_dropped() {
        assert_eq!(clean_lines("-\n•\n - • -\nreal"), vec!["real"]);
    }

    #[test]
    fn test_clean_preserves_order_and_duplicates() {
        let items = clean_lines("b\na\r\nb");
        assert_eq!(items, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_clean_splits_on_every_line_break() {
        assert_eq!(
            clean_lines("Fall in lounge\rMedication delay"),
            vec!["Fall in lounge", "Medication delay"]
        );
        assert_eq!(clean_lines("a\u{2028}b\u{2029}c"), vec!["a", "b", "c"]);
        assert_eq!(clean_lines("a\u{0B}b\u{0C}c\u{85}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(clean_lines("a\u{1C}b\u{1D}c\u{1E}d"), vec!["a", "b", "c", "d"]);
        assert_eq!(clean_lines("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_pick_items_old_mac_endings() {
        assert_eq!(pick_items("one\rtwo\rthree", 2), "one; two");
    }

    #[test]
    fn test_pick_items() {
        assert_eq!(pick_items("", 2), "none");
        assert_eq!(pick_items(None, 2), "none");
        assert_eq!(pick_items("one", 2), "one");
        assert_eq!(pick_items("one\ntwo\nthree", 2), "one; two");
        assert_eq!(pick_items("one\ntwo\nthree", 0), "");
    }
}
