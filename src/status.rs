//! Status line model
//!
//! A snapshot of what the status line shows: caret position (1-based),
//! document statistics and the file name with a modified marker.

use std::fmt;
use std::path::Path;

use crate::editable::EditorState;

/// Name shown for documents that were never saved
pub const UNTITLED: &str = "[Untitled]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// 1-based caret line
    pub line: usize,
    /// 1-based caret column
    pub column: usize,
    pub line_count: usize,
    pub word_count: usize,
    /// Characters in the selection (0 when nothing is selected)
    pub selection_chars: usize,
    pub file_name: String,
    pub is_modified: bool,
}

impl StatusInfo {
    pub fn new(state: &EditorState, file_path: Option<&Path>, is_modified: bool) -> Self {
        let caret = state.caret();
        let file_name = file_path
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string());

        Self {
            line: caret.line + 1,
            column: caret.column + 1,
            line_count: state.document().line_count(),
            word_count: state.document().word_count(),
            selection_chars: state.selected_text().chars().count(),
            file_name,
            is_modified,
        }
    }

    /// File name plus ` *` when there are unsaved changes
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{} *", self.file_name)
        } else {
            self.file_name.clone()
        }
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)?;
        if self.selection_chars > 0 {
            write!(f, " ({} selected)", self.selection_chars)?;
        }
        write!(f, " | {} words | {}", self.word_count, self.display_name())
    }
}
