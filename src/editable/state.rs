//! EditorState - the edit command layer tying document, selection and history together.

use crate::tracing::SelectionSnapshot;
use crate::util::normalize_line_breaks;

use super::buffer::Document;
use super::clipboard::Clipboard;
use super::error::EditResult;
use super::history::{EditHistory, EditRecord, DEFAULT_HISTORY_LIMIT};
use super::messages::{EditCommand, MoveTarget};
use super::position::{Position, Range};
use super::selection::Selection;

/// One open document with its caret, selection and undo history.
///
/// All mutation goes through [`EditorState::execute`] (or the per-command
/// methods it dispatches to). Every document change is recorded as exactly
/// one [`EditRecord`], so each command is undone by exactly one undo.
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    selection: Selection,
    history: EditHistory,
    /// Column that Up/Down try to keep while crossing shorter lines
    desired_column: Option<usize>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Empty document, caret at the origin
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Empty document keeping at most `limit` undo steps
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            document: Document::new(),
            selection: Selection::default(),
            history: EditHistory::with_max_size(limit),
            desired_column: None,
        }
    }

    /// Document with initial text, caret at the origin, empty history
    pub fn with_text(text: &str) -> Self {
        let mut state = Self::new();
        state.load(text);
        state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Caret position
    pub fn caret(&self) -> Position {
        self.selection.active
    }

    /// Whole document serialized for saving
    pub fn full_text(&self) -> String {
        self.document.full_text()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.selection
            .normalized_range()
            .and_then(|range| self.document.text_in(range).ok())
            .unwrap_or_default()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Run one command.
    ///
    /// Returns whether the command had any effect. Commands whose
    /// precondition does not hold (cut without a selection, undo with empty
    /// history, paste with an empty clipboard) return `Ok(false)`.
    pub fn execute(&mut self, command: EditCommand, clipboard: &mut Clipboard) -> EditResult<bool> {
        let name = command.name();
        let is_movement = command.is_movement();
        let before = SelectionSnapshot::from_state(self);

        let result = match command {
            EditCommand::Insert(text) => self.insert_text(&text),
            EditCommand::Backspace => self.backspace(),
            EditCommand::DeleteForward => self.delete_forward(),
            EditCommand::Cut => self.cut(clipboard),
            EditCommand::Copy => self.copy(clipboard),
            EditCommand::Paste => self.paste(clipboard),
            EditCommand::SelectAll => Ok(self.select_all()),
            EditCommand::MoveCursor { position, extend } => Ok(self.move_to(position, extend)),
            EditCommand::Move { target, extend } => Ok(self.move_cursor(target, extend)),
            EditCommand::Undo => self.undo(),
            EditCommand::Redo => self.redo(),
            EditCommand::LoadDocument(text) => {
                self.load(&text);
                Ok(true)
            }
        };

        match &result {
            Ok(changed) => {
                if is_movement {
                    tracing::trace!(command = name, changed = *changed, "command executed");
                } else {
                    tracing::debug!(command = name, changed = *changed, "command executed");
                }
                if let Some(diff) = before.diff(&SelectionSnapshot::from_state(self)) {
                    tracing::trace!(command = name, "{}", diff);
                }
            }
            Err(e) => tracing::warn!(command = name, "command rejected: {}", e),
        }
        result
    }

    /// Replace the whole document. History is cleared and the caret goes
    /// back to the origin.
    pub fn load(&mut self, text: &str) {
        self.document.load(text);
        self.history.clear();
        self.selection = Selection::caret(Position::zero());
        self.desired_column = None;
    }

    /// The selection, or an empty range at the caret
    fn selection_or_caret(&self) -> Range {
        self.selection
            .normalized_range()
            .unwrap_or_else(|| Range::empty(self.selection.active))
    }

    /// Replace `range` with `text` as a single undoable edit.
    /// The caret lands after the inserted text.
    fn replace(&mut self, range: Range, text: &str) -> EditResult<bool> {
        if range.is_empty() && text.is_empty() {
            return Ok(false);
        }

        let selection_before = self.selection;
        let removed = self.document.delete(range)?;
        let caret = self.document.insert(range.start, text)?;

        self.selection = Selection::caret(caret);
        self.desired_column = None;
        self.history.push(EditRecord::new(
            range.start,
            removed,
            text.to_string(),
            selection_before,
            self.selection,
        ));
        Ok(true)
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditorState {
    /// Insert text at the caret, replacing the selection if there is one
    pub fn insert_text(&mut self, text: &str) -> EditResult<bool> {
        let text = normalize_line_breaks(text);
        let range = self.selection_or_caret();
        self.replace(range, &text)
    }

    /// Delete the selection, or the grapheme before the caret (Backspace)
    pub fn backspace(&mut self) -> EditResult<bool> {
        let range = match self.selection.normalized_range() {
            Some(range) => range,
            None => {
                let caret = self.selection.active;
                Range::new(self.document.prev_grapheme(caret), caret)
            }
        };
        self.replace(range, "")
    }

    /// Delete the selection, or the grapheme after the caret (Delete key)
    pub fn delete_forward(&mut self) -> EditResult<bool> {
        let range = match self.selection.normalized_range() {
            Some(range) => range,
            None => {
                let caret = self.selection.active;
                Range::new(caret, self.document.next_grapheme(caret))
            }
        };
        self.replace(range, "")
    }

    /// Move the selected text to the clipboard
    pub fn cut(&mut self, clipboard: &mut Clipboard) -> EditResult<bool> {
        let Some(range) = self.selection.normalized_range() else {
            return Ok(false);
        };
        let text = self.document.text_in(range)?;
        clipboard.set(&text);
        self.replace(range, "")
    }

    /// Copy the selected text to the clipboard. Never touches history.
    pub fn copy(&self, clipboard: &mut Clipboard) -> EditResult<bool> {
        let Some(range) = self.selection.normalized_range() else {
            return Ok(false);
        };
        clipboard.set(&self.document.text_in(range)?);
        Ok(true)
    }

    /// Insert the clipboard content like typed text
    pub fn paste(&mut self, clipboard: &mut Clipboard) -> EditResult<bool> {
        let text = clipboard.get();
        if text.is_empty() {
            return Ok(false);
        }
        self.insert_text(&text)
    }

    /// Undo the most recent edit, restoring the selection it started from
    pub fn undo(&mut self) -> EditResult<bool> {
        let Some(record) = self.history.undo() else {
            return Ok(false);
        };

        self.document.delete(record.inserted_range())?;
        self.document.insert(record.start, &record.removed)?;
        self.selection = record.selection_before;
        self.desired_column = None;
        Ok(true)
    }

    /// Re-apply the most recently undone edit
    pub fn redo(&mut self) -> EditResult<bool> {
        let Some(record) = self.history.redo() else {
            return Ok(false);
        };

        self.document.delete(record.removed_range())?;
        self.document.insert(record.start, &record.inserted)?;
        self.selection = record.selection_after;
        self.desired_column = None;
        Ok(true)
    }
}

// =============================================================================
// Selection and Movement
// =============================================================================

impl EditorState {
    /// Select all text
    pub fn select_all(&mut self) -> bool {
        let before = self.selection;
        self.selection.select_all(&self.document);
        self.desired_column = None;
        self.selection != before
    }

    /// Put the caret at `position` (clamped), extending the selection or
    /// clearing it
    pub fn move_to(&mut self, position: Position, extend: bool) -> bool {
        let before = self.selection;
        self.selection.move_to(position, extend, &self.document);
        self.desired_column = None;
        self.selection != before
    }

    /// Keyboard motion
    pub fn move_cursor(&mut self, target: MoveTarget, extend: bool) -> bool {
        // Left/Right without shift collapse a selection onto its edge
        if !extend {
            if let Some(range) = self.selection.normalized_range() {
                let edge = match target {
                    MoveTarget::Left | MoveTarget::WordLeft => Some(range.start),
                    MoveTarget::Right | MoveTarget::WordRight => Some(range.end),
                    _ => None,
                };
                if let Some(edge) = edge {
                    return self.move_to(edge, false);
                }
            }
        }

        let caret = self.selection.active;
        let destination = match target {
            MoveTarget::Up => return self.move_vertical(true, extend),
            MoveTarget::Down => return self.move_vertical(false, extend),
            MoveTarget::Left => self.document.prev_grapheme(caret),
            MoveTarget::Right => self.document.next_grapheme(caret),
            MoveTarget::LineStart => Position::new(caret.line, 0),
            MoveTarget::LineEnd => Position::new(caret.line, self.document.line_length(caret.line)),
            MoveTarget::WordLeft => self.document.prev_word(caret),
            MoveTarget::WordRight => self.document.next_word(caret),
            MoveTarget::DocumentStart => Position::zero(),
            MoveTarget::DocumentEnd => self.document.end(),
        };
        self.move_to(destination, extend)
    }

    fn move_vertical(&mut self, up: bool, extend: bool) -> bool {
        let caret = self.selection.active;
        let line = if up {
            caret.line.checked_sub(1)
        } else {
            Some(caret.line + 1).filter(|&line| line < self.document.line_count())
        };
        let Some(line) = line else {
            return false;
        };

        let desired = *self.desired_column.get_or_insert(caret.column);
        let before = self.selection;
        self.selection
            .move_to(Position::new(line, desired), extend, &self.document);
        self.selection != before
    }
}
