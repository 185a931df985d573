//! Document model: the text being edited, addressed by line and column.
//!
//! Backed by a `ropey::Rope`. Inside the rope `\n` is the only line break;
//! carriage returns are normalized away on load and insert, and the line
//! ending detected on load is written back by [`Document::full_text`].

use ropey::Rope;

use crate::util::{char_type, next_grapheme_column, normalize_line_breaks, prev_grapheme_column};
use crate::util::{word_count, CharType};

use super::error::{EditError, EditResult};
use super::position::{Position, Range};

/// Line terminator used when serializing the document.
///
/// The style of the first line break wins: a file mixing styles is written
/// back with every break in that style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    /// Classic Mac OS lone carriage return
    Cr,
}

impl LineEnding {
    /// Detect from the first line break in `text`; defaults to LF
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        match text.find(['\r', '\n']) {
            Some(idx) if bytes[idx] == b'\r' => {
                if bytes.get(idx + 1) == Some(&b'\n') {
                    Self::CrLf
                } else {
                    Self::Cr
                }
            }
            _ => Self::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// The text content as an ordered sequence of lines (always at least one).
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
}

impl Document {
    /// Create an empty document (one empty line)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from text, normalizing line breaks
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_line_breaks(text)),
            line_ending: LineEnding::detect(text),
        }
    }

    /// Replace the entire content
    pub fn load(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    /// Serialize the content using the detected line ending
    pub fn full_text(&self) -> String {
        let text = self.rope.to_string();
        match self.line_ending {
            LineEnding::Lf => text,
            ending => text.replace('\n', ending.as_str()),
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in characters, excluding the line break.
    /// Lines past the end report 0.
    pub fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Line content without its line break
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Total length in characters (line breaks count as one)
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Last valid position in the document
    pub fn end(&self) -> Position {
        let last_line = self.line_count() - 1;
        Position::new(last_line, self.line_length(last_line))
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.line < self.line_count() && pos.column <= self.line_length(pos.line)
    }

    /// Clamp a position into the document bounds
    pub fn clamp(&self, pos: Position) -> Position {
        let last_line = self.line_count() - 1;
        if pos.line > last_line {
            return self.end();
        }
        Position::new(pos.line, pos.column.min(self.line_length(pos.line)))
    }

    /// Character offset of a valid position
    fn offset_of(&self, pos: Position) -> EditResult<usize> {
        if !self.is_valid(pos) {
            return Err(EditError::OutOfRange {
                position: pos,
                line_count: self.line_count(),
            });
        }
        Ok(self.rope.line_to_char(pos.line) + pos.column)
    }

    fn offsets_of(&self, range: Range) -> EditResult<std::ops::Range<usize>> {
        let start = self.offset_of(range.start)?;
        let end = self.offset_of(range.end)?;
        Ok(start..end)
    }

    /// Insert text at `pos`, returning the position right after it
    pub fn insert(&mut self, pos: Position, text: &str) -> EditResult<Position> {
        let offset = self.offset_of(pos)?;
        let text = normalize_line_breaks(text);
        self.rope.insert(offset, &text);
        Ok(pos.advanced_by(&text))
    }

    /// Remove the text in `range`, returning it verbatim
    pub fn delete(&mut self, range: Range) -> EditResult<String> {
        let offsets = self.offsets_of(range)?;
        if offsets.is_empty() {
            return Ok(String::new());
        }
        let removed = self.rope.slice(offsets.clone()).to_string();
        self.rope.remove(offsets);
        Ok(removed)
    }

    /// Text covered by `range`
    pub fn text_in(&self, range: Range) -> EditResult<String> {
        let offsets = self.offsets_of(range)?;
        Ok(self.rope.slice(offsets).to_string())
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.rope
            .lines()
            .map(|line| word_count(&line.to_string()))
            .sum()
    }

    /// Start of the grapheme cluster before `pos`; a line break is one step.
    pub fn prev_grapheme(&self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        if pos.column == 0 {
            if pos.line == 0 {
                return pos;
            }
            return Position::new(pos.line - 1, self.line_length(pos.line - 1));
        }
        let line = self.line(pos.line).unwrap_or_default();
        Position::new(pos.line, prev_grapheme_column(&line, pos.column))
    }

    /// End of the grapheme cluster after `pos`; a line break is one step.
    pub fn next_grapheme(&self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        if pos.column >= self.line_length(pos.line) {
            if pos.line + 1 >= self.line_count() {
                return pos;
            }
            return Position::new(pos.line + 1, 0);
        }
        let line = self.line(pos.line).unwrap_or_default();
        Position::new(pos.line, next_grapheme_column(&line, pos.column))
    }

    /// Start of the previous word, moving to the end of the previous line
    /// from column 0.
    pub fn prev_word(&self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        if pos.column == 0 {
            return self.prev_grapheme(pos);
        }
        let chars: Vec<char> = self.line(pos.line).unwrap_or_default().chars().collect();
        let mut col = pos.column;

        // Skip whitespace/punctuation, then the word itself
        while col > 0 && char_type(chars[col - 1]) != CharType::WordChar {
            col -= 1;
        }
        while col > 0 && char_type(chars[col - 1]) == CharType::WordChar {
            col -= 1;
        }
        Position::new(pos.line, col)
    }

    /// Start of the next word, moving to the start of the next line from the
    /// line end.
    pub fn next_word(&self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        let line_len = self.line_length(pos.line);
        if pos.column >= line_len {
            return self.next_grapheme(pos);
        }
        let chars: Vec<char> = self.line(pos.line).unwrap_or_default().chars().collect();
        let mut col = pos.column;

        let start_type = char_type(chars[col]);
        while col < line_len && char_type(chars[col]) == start_type {
            col += 1;
        }
        while col < line_len && char_type(chars[col]) == CharType::Whitespace {
            col += 1;
        }
        Position::new(pos.line, col)
    }
}
