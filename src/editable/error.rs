//! Error type for the editing engine.

use super::position::Position;

/// Errors raised by document primitives.
///
/// These only occur when a caller hands the engine a position that does not
/// exist in the document. User-level conditions (nothing to undo, no
/// selection to cut, empty clipboard) are no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Position (or range end) outside the document bounds
    OutOfRange {
        position: Position,
        line_count: usize,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                position,
                line_count,
            } => write!(
                f,
                "position {} is out of range (document has {} lines)",
                position, line_count
            ),
        }
    }
}

impl std::error::Error for EditError {}

/// Result alias for engine operations
pub type EditResult<T> = Result<T, EditError>;
