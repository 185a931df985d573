//! Command types accepted by the editing engine.

use super::position::Position;

/// Target for keyboard cursor motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one grapheme left
    Left,
    /// Move one grapheme right
    Right,
    /// Move one line up
    Up,
    /// Move one line down
    Down,
    /// Move to start of line
    LineStart,
    /// Move to end of line
    LineEnd,
    /// Move one word left
    WordLeft,
    /// Move one word right
    WordRight,
    /// Move to start of document
    DocumentStart,
    /// Move to end of document
    DocumentEnd,
}

/// Every command the UI shell can send to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    // === Editing ===
    /// Insert text at the caret, replacing the selection
    Insert(String),
    /// Delete the selection or the grapheme before the caret
    Backspace,
    /// Delete the selection or the grapheme after the caret
    DeleteForward,

    // === Clipboard ===
    /// Copy the selection to the clipboard and delete it
    Cut,
    /// Copy the selection to the clipboard
    Copy,
    /// Insert the clipboard content
    Paste,

    // === Selection and movement ===
    /// Select the whole document
    SelectAll,
    /// Put the caret at a position (e.g. a mouse click), optionally
    /// extending the selection (shift-click, drag)
    MoveCursor { position: Position, extend: bool },
    /// Keyboard motion, optionally extending the selection
    Move { target: MoveTarget, extend: bool },

    // === History ===
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,

    // === Document ===
    /// Replace the whole document; resets history and caret
    LoadDocument(String),
}

impl EditCommand {
    /// Check if this command can modify the document
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            EditCommand::Insert(_)
                | EditCommand::Backspace
                | EditCommand::DeleteForward
                | EditCommand::Cut
                | EditCommand::Paste
                | EditCommand::Undo
                | EditCommand::Redo
        )
    }

    /// Check if this command only moves the caret or selection
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            EditCommand::MoveCursor { .. } | EditCommand::Move { .. } | EditCommand::SelectAll
        )
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::Insert(_) => "insert",
            EditCommand::Backspace => "backspace",
            EditCommand::DeleteForward => "delete_forward",
            EditCommand::Cut => "cut",
            EditCommand::Copy => "copy",
            EditCommand::Paste => "paste",
            EditCommand::SelectAll => "select_all",
            EditCommand::MoveCursor { .. } => "move_cursor",
            EditCommand::Move { .. } => "move",
            EditCommand::Undo => "undo",
            EditCommand::Redo => "redo",
            EditCommand::LoadDocument(_) => "load_document",
        }
    }
}
