//! Text editing engine for termedit.
//!
//! The engine is UI-agnostic: a shell feeds it [`EditCommand`]s and reads
//! back the document text, caret and selection.
//!
//! # Architecture
//!
//! - [`Document`]: rope-backed text addressed by line/column [`Position`]s
//! - [`Selection`]: caret plus optional anchor
//! - [`EditHistory`]: bounded undo/redo stacks of [`EditRecord`]s
//! - [`Clipboard`]: session-wide cut/copy slot, optionally mirrored to the
//!   system clipboard
//! - [`EditorState`]: the command layer tying the above together
//!
//! # Example
//!
//! ```
//! use termedit::editable::{Clipboard, EditCommand, EditorState};
//!
//! let mut state = EditorState::new();
//! let mut clipboard = Clipboard::new();
//!
//! state.execute(EditCommand::Insert("hello".into()), &mut clipboard).unwrap();
//! state.execute(EditCommand::Undo, &mut clipboard).unwrap();
//!
//! assert_eq!(state.full_text(), "");
//! ```

mod buffer;
mod clipboard;
mod error;
mod history;
mod messages;
mod position;
mod selection;
mod state;

pub use buffer::{Document, LineEnding};
pub use clipboard::Clipboard;
pub use error::{EditError, EditResult};
pub use history::{EditHistory, EditRecord, DEFAULT_HISTORY_LIMIT};
pub use messages::{EditCommand, MoveTarget};
pub use position::{Position, Range};
pub use selection::Selection;
pub use state::EditorState;
