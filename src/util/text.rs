// src/util/text.rs

/// First non-empty line of `text`, trimmed and cut to `max_chars` characters.
///
/// A cut line ends with `...` when `max_chars` leaves room for it. The result
/// never exceeds `max_chars`, which counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use notekeeper::util::text::preview;
///
/// assert_eq!(preview("\n  Buy milk  \nand eggs", 20), "Buy milk");
/// assert_eq!(preview("abcdefghij", 6), "abc...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let line = text
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    const ELLIPSIS: &str = "...";
    // no room for the ellipsis: hard cut
    if max_chars <= ELLIPSIS.len() {
        return line.chars().take(max_chars).collect();
    }
    let keep = max_chars - ELLIPSIS.len();
    let mut cut: String = line.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_multiline_text_when_previewing_then_returns_only_first_line() {
        assert_eq!(preview("First line\nSecond line", 80), "First line");
    }

    #[test]
    fn given_leading_blank_lines_when_previewing_then_skips_them() {
        assert_eq!(preview("\n\n   \nActual", 80), "Actual");
    }

    #[test]
    fn given_empty_text_when_previewing_then_returns_empty_string() {
        assert_eq!(preview("", 10), "");
    }

    #[test]
    fn given_long_line_when_previewing_then_truncates_with_ellipsis() {
        assert_eq!(preview("The quick brown fox", 10), "The qui...");
    }

    #[test]
    fn given_width_below_ellipsis_when_previewing_then_cuts_without_ellipsis() {
        assert_eq!(preview("abcdef", 2), "ab");
        assert_eq!(preview("abcdef", 3), "abc");
        assert_eq!(preview("abcdef", 0), "");
    }

    #[test]
    fn given_width_just_above_ellipsis_when_previewing_then_keeps_one_char() {
        assert_eq!(preview("abcdef", 4), "a...");
    }

    #[test]
    fn given_multibyte_text_when_previewing_then_counts_characters() {
        assert_eq!(preview("äöüäöüäöü", 5), "äö...");
    }
}
