//! Edit history (undo/redo) for the editing engine.

use std::collections::VecDeque;

use super::position::{Position, Range};
use super::selection::Selection;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// A single reversible edit.
///
/// Every command is expressed as "replace the text starting at `start`":
/// pure inserts have an empty `removed`, pure deletes an empty `inserted`,
/// and typing over a selection carries both so one undo restores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Where the replaced range begins
    pub start: Position,
    /// Text that was removed (empty for pure inserts)
    pub removed: String,
    /// Text that was inserted (empty for pure deletes)
    pub inserted: String,
    /// Caret and selection before the edit
    pub selection_before: Selection,
    /// Caret and selection after the edit
    pub selection_after: Selection,
}

impl EditRecord {
    pub fn new(
        start: Position,
        removed: String,
        inserted: String,
        selection_before: Selection,
        selection_after: Selection,
    ) -> Self {
        Self {
            start,
            removed,
            inserted,
            selection_before,
            selection_after,
        }
    }

    /// Span the removed text occupied before the edit
    pub fn removed_range(&self) -> Range {
        Range::new(self.start, self.start.advanced_by(&self.removed))
    }

    /// Span the inserted text occupies after the edit
    pub fn inserted_range(&self) -> Range {
        Range::new(self.start, self.start.advanced_by(&self.inserted))
    }
}

/// Bounded undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<EditRecord>,
    redo_stack: Vec<EditRecord>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new edit history with specified max size.
    /// A size of 0 keeps nothing, which disables undo.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record a new edit: clears the redo stack and evicts the oldest entry
    /// when over capacity
    pub fn push(&mut self, record: EditRecord) {
        self.redo_stack.clear();
        self.undo_stack.push_back(record);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
    }

    /// Take the most recent edit for undoing; it moves to the redo stack
    pub fn undo(&mut self) -> Option<EditRecord> {
        let record = self.undo_stack.pop_back()?;
        self.redo_stack.push(record.clone());
        Some(record)
    }

    /// Take the most recently undone edit for redoing; it moves back to the
    /// undo stack
    pub fn redo(&mut self) -> Option<EditRecord> {
        let record = self.redo_stack.pop()?;
        self.undo_stack.push_back(record.clone());
        Some(record)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Undo stack from oldest to newest
    pub fn records(&self) -> impl Iterator<Item = &EditRecord> {
        self.undo_stack.iter()
    }
}
