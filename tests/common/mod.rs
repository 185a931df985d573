//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use termedit::editable::{Clipboard, EditCommand, EditorState, MoveTarget, Position};
use termedit::Session;

/// Create a state with given text and caret position
pub fn test_state(text: &str, line: usize, column: usize) -> EditorState {
    let mut state = EditorState::with_text(text);
    state.move_to(Position::new(line, column), false);
    state
}

/// Create a state with given text and a selection (anchor to head).
/// The caret will be at the head position
pub fn test_state_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> EditorState {
    let mut state = test_state(text, anchor_line, anchor_col);
    state.move_to(Position::new(head_line, head_col), true);
    state
}

/// Run a sequence of commands, panicking on engine errors
pub fn run_all(
    state: &mut EditorState,
    clipboard: &mut Clipboard,
    commands: impl IntoIterator<Item = EditCommand>,
) {
    for command in commands {
        state.execute(command, clipboard).unwrap();
    }
}

pub fn insert(text: &str) -> EditCommand {
    EditCommand::Insert(text.to_string())
}

pub fn move_to(line: usize, column: usize) -> EditCommand {
    EditCommand::MoveCursor {
        position: Position::new(line, column),
        extend: false,
    }
}

pub fn select_to(line: usize, column: usize) -> EditCommand {
    EditCommand::MoveCursor {
        position: Position::new(line, column),
        extend: true,
    }
}

pub fn go(target: MoveTarget) -> EditCommand {
    EditCommand::Move {
        target,
        extend: false,
    }
}

pub fn extend(target: MoveTarget) -> EditCommand {
    EditCommand::Move {
        target,
        extend: true,
    }
}

/// Session with a process-local clipboard
pub fn test_session() -> Session {
    Session::with_clipboard(Clipboard::new(), 1000)
}
