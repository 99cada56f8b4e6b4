//! Grapheme cluster iteration and char/byte offset helpers.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Byte offsets of every grapheme boundary after the start of `s`.
///
/// The last entry is always `s.len()` for non-empty input. Splitting `s` at
/// any returned offset never cuts a grapheme cluster apart.
#[must_use]
pub fn grapheme_boundaries(s: &str) -> Vec<usize> {
    s.grapheme_indices(true)
        .map(|(idx, g)| idx + g.len())
        .collect()
}

/// Number of chars (Unicode scalar values) in `s`.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `char_index`, or `s.len()` past the end.
#[must_use]
pub fn byte_offset_of_char(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(byte, _)| byte)
}

/// Length in bytes of the hard line break at the start of `s`, if any.
///
/// `\r\n` wins over a lone `\r`.
#[must_use]
pub fn line_break_len(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with('\n') || s.starts_with('\r') {
        Some(1)
    } else {
        None
    }
}

/// Check if `s` is exactly one hard line break token.
#[must_use]
pub fn is_line_break(s: &str) -> bool {
    matches!(s, "\n" | "\r" | "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_boundaries_keep_clusters_whole() {
        // e + combining acute accent is a single cluster
        assert_eq!(grapheme_boundaries("e\u{0301}x"), vec![3, 4]);
        // Family emoji (ZWJ sequence)
        let family = "👨‍👩‍👧";
        assert_eq!(grapheme_boundaries(family), vec![family.len()]);
        assert!(grapheme_boundaries("").is_empty());
    }

    #[test]
    fn test_char_offsets() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(byte_offset_of_char("héllo", 2), 3);
        assert_eq!(byte_offset_of_char("abc", 7), 3);
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(line_break_len("\r\nx"), Some(2));
        assert_eq!(line_break_len("\rx"), Some(1));
        assert_eq!(line_break_len("\nx"), Some(1));
        assert_eq!(line_break_len("x\n"), None);
        assert!(is_line_break("\r\n"));
        assert!(!is_line_break("\n\n"));
    }
}
