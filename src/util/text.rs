use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Widths are display columns, not characters: CJK characters and most emoji
/// occupy two columns, which matters for this feed's Japanese headlines.
/// Returns `Cow::Borrowed` when the string already fits. For widths of 3 or
/// fewer columns there is no room for text plus the ellipsis, so the result
/// is simply as many leading characters as fit.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut used = 0;
    let mut cut = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        Cow::Owned(s[..cut].to_string())
    } else {
        Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_is_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_cjk_truncation_respects_double_width() {
        // Each CJK character is 2 columns: 8 total, budget 7 - 3 = 4.
        assert_eq!(truncate_to_width("東京株式", 7), "東京...");
        assert_eq!(truncate_to_width("東京", 10), "東京");
    }

    #[test]
    fn test_no_split_inside_double_width_char() {
        // Budget of 3 columns fits one CJK char (2) but not a second.
        assert_eq!(truncate_to_width("東京株式", 6), "東...");
    }

    #[test]
    fn test_narrow_widths_drop_ellipsis() {
        assert_eq!(truncate_to_width("Test!", 0), "");
        assert_eq!(truncate_to_width("Test!", 1), "T");
        assert_eq!(truncate_to_width("Test!", 3), "Tes");
    }

    #[test]
    fn test_exact_fit_is_unchanged() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }
}
