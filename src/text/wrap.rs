//! Greedy fixed-column word wrapping.

const TAB_SIZE: usize = 8;

/// ASCII whitespace, the only characters a line may break at.
fn is_break_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Expand tabs to the next multiple of [`TAB_SIZE`] and turn every other
/// break character into a single space.
fn expand_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_break_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Wrap `text` into lines of at most `width` characters.
///
/// Breaks only at whitespace: words are never split, hyphenated words stay
/// whole, and a word longer than `width` gets a line of its own. Spacing
/// inside a line is kept, with tabs expanded to 8-column stops. Whitespace
/// at either end of a line is dropped. Returns an empty vec for blank input.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let expanded = expand_whitespace(text);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    let mut gap = "";

    for chunk in chunks(&expanded) {
        if chunk.starts_with(' ') {
            if current_len > 0 {
                gap = chunk;
            }
            continue;
        }

        let word_len = chunk.chars().count();
        if current_len == 0 {
            current.push_str(chunk);
            current_len = word_len;
        } else if current_len + gap.len() + word_len <= width {
            current.push_str(gap);
            current.push_str(chunk);
            current_len += gap.len() + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(chunk);
            current_len = word_len;
        }
        gap = "";
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

/// Split into alternating runs of spaces and non-spaces.
fn chunks(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let space = first == ' ';
        let end = rest
            .find(|c: char| (c == ' ') != space)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap_text("short line", 20), vec!["short line"]);
    }

    #[test]
    fn test_wrap_breaks_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_exact_width() {
        assert_eq!(wrap_text("abcde fghij", 11), vec!["abcde fghij"]);
        assert_eq!(wrap_text("abcde fghij", 10), vec!["abcde", "fghij"]);
    }

    #[test]
    fn test_wrap_long_word_not_broken() {
        assert_eq!(
            wrap_text("a supercalifragilistic b", 8),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_wrap_keeps_hyphenated_words() {
        assert_eq!(
            wrap_text("re-check follow-up", 12),
            vec!["re-check", "follow-up"]
        );
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_text("café café", 9), vec!["café café"]);
    }

    #[test]
    fn test_wrap_keeps_inner_spacing() {
        assert_eq!(wrap_text("a   b", 20), vec!["a   b"]);
        assert_eq!(wrap_text("a   b\tc", 20), vec!["a   b   c"]);
        assert_eq!(wrap_text("Bay 4:\tcheck", 20), vec!["Bay 4:  check"]);
    }

    #[test]
    fn test_wrap_drops_spacing_at_breaks() {
        assert_eq!(wrap_text("  abc    def  ", 5), vec!["abc", "def"]);
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one two"]);
    }

    #[test]
    fn test_wrap_wide_gap_forces_break() {
        assert_eq!(wrap_text("ab     cd", 8), vec!["ab", "cd"]);
        assert_eq!(wrap_text("ab    cd", 8), vec!["ab    cd"]);
    }
}
