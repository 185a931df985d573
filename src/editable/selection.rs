//! Caret and selection state.

use super::buffer::Document;
use super::position::{Position, Range};

/// The caret plus an optional selection anchor.
///
/// `active` is the caret, the end that moves. When `anchor` is set and
/// differs from `active`, the text between them is selected. Anchor and
/// active are kept in the order the user produced them; use
/// [`Selection::normalized_range`] for an ordered span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Fixed end of the selection, if any
    pub anchor: Option<Position>,
    /// Caret position
    pub active: Position,
}

impl Selection {
    /// A caret with no selection
    pub const fn caret(pos: Position) -> Self {
        Self {
            anchor: None,
            active: pos,
        }
    }

    /// A selection from `anchor` to `active`
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self {
            anchor: Some(anchor),
            active,
        }
    }

    /// Whether a non-empty span is selected
    pub fn has_selection(&self) -> bool {
        matches!(self.anchor, Some(anchor) if anchor != self.active)
    }

    /// Check if selection is reversed (caret before anchor)
    pub fn is_reversed(&self) -> bool {
        matches!(self.anchor, Some(anchor) if self.active < anchor)
    }

    /// The selection as an ordered range, or `None` for a pure caret
    pub fn normalized_range(&self) -> Option<Range> {
        match self.anchor {
            Some(anchor) if anchor != self.active => Some(Range::new(anchor, self.active)),
            _ => None,
        }
    }

    /// Move the caret to `pos`, clamped to the document.
    ///
    /// With `extend_selection` the anchor stays where it is, or is dropped at
    /// the previous caret position if there was none. Otherwise the
    /// selection is cleared.
    pub fn move_to(&mut self, pos: Position, extend_selection: bool, document: &Document) {
        let target = document.clamp(pos);
        if extend_selection {
            if self.anchor.is_none() {
                self.anchor = Some(self.active);
            }
        } else {
            self.anchor = None;
        }
        self.active = target;
    }

    /// Select the whole document: anchor at the start, caret at the end
    pub fn select_all(&mut self, document: &Document) {
        self.anchor = Some(Position::zero());
        self.active = document.end();
    }
}
