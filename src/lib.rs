//! termedit - a small text editor engine with a line-oriented shell
//!
//! The [`editable`] module is the UI-agnostic editing engine (document,
//! selection, undo/redo, clipboard). [`session`] binds it to files and
//! [`shell`] drives a session from text commands.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod session;
pub mod shell;
pub mod status;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{Clipboard, EditCommand, EditorState, Position};
pub use session::Session;
pub use status::StatusInfo;
