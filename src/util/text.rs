//! Text utilities shared by the document model and cursor motions

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character class used by word motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Rewrite `\r\n` and lone `\r` as `\n`. Borrows when there is nothing to do.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Character column of the grapheme boundary before `column` in `line`.
///
/// Returns 0 when `column` is already 0.
pub fn prev_grapheme_column(line: &str, column: usize) -> usize {
    let mut boundary = 0;
    let mut chars_seen = 0;
    for grapheme in line.graphemes(true) {
        let next = chars_seen + grapheme.chars().count();
        if next >= column {
            break;
        }
        chars_seen = next;
        boundary = next;
    }
    boundary
}

/// Character column of the grapheme boundary after `column` in `line`.
///
/// Clamps to the line length.
pub fn next_grapheme_column(line: &str, column: usize) -> usize {
    let mut chars_seen = 0;
    for grapheme in line.graphemes(true) {
        chars_seen += grapheme.chars().count();
        if chars_seen > column {
            return chars_seen;
        }
    }
    chars_seen
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_type() {
        assert_eq!(char_type(' '), CharType::Whitespace);
        assert_eq!(char_type('\t'), CharType::Whitespace);
        assert_eq!(char_type('a'), CharType::WordChar);
        assert_eq!(char_type('_'), CharType::WordChar);
        assert_eq!(char_type('é'), CharType::WordChar);
        assert_eq!(char_type('.'), CharType::Punctuation);
    }

    #[test]
    fn test_normalize_line_breaks() {
        assert!(matches!(normalize_line_breaks("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_line_breaks("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize_line_breaks("\r\n\r\n"), "\n\n");
    }

    #[test]
    fn test_grapheme_columns_ascii() {
        assert_eq!(prev_grapheme_column("hello", 3), 2);
        assert_eq!(prev_grapheme_column("hello", 0), 0);
        assert_eq!(next_grapheme_column("hello", 3), 4);
        assert_eq!(next_grapheme_column("hello", 5), 5);
    }

    #[test]
    fn test_grapheme_columns_combining() {
        // "e" + combining acute accent is one cluster of two chars
        let line = "ae\u{301}b";
        assert_eq!(prev_grapheme_column(line, 3), 1);
        assert_eq!(next_grapheme_column(line, 1), 3);
    }

    #[test]
    fn test_grapheme_columns_emoji_sequence() {
        // Family emoji: four people joined by ZWJ, 7 chars
        let line = "x👨‍👩‍👧‍👦y";
        assert_eq!(next_grapheme_column(line, 1), 8);
        assert_eq!(prev_grapheme_column(line, 8), 1);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("hello  world\nfoo"), 3);
    }
}
