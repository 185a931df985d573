//! Editing session: one open document bound to an optional file
//!
//! The session owns the [`EditorState`] and the session [`Clipboard`], and
//! tracks the file path and whether there are unsaved changes. The
//! clipboard outlives documents: `new_file` and `open` keep its content.
//!
//! Files may be read in any encoding `encoding_rs` knows, but are always
//! written back as UTF-8.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use encoding_rs::{Encoding, UTF_8};

use crate::config::EditorConfig;
use crate::editable::{Clipboard, EditCommand, EditResult, EditorState};
use crate::status::StatusInfo;
use crate::util::{filename_for_display, read_text_file, FileOpenError};

#[derive(Debug)]
pub struct Session {
    state: EditorState,
    clipboard: Clipboard,
    /// Path to the file on disk (None for new/unsaved documents)
    file_path: Option<PathBuf>,
    /// Whether the document has unsaved changes
    is_modified: bool,
    /// Encoding the file was decoded from
    encoding: &'static Encoding,
    history_limit: usize,
}

impl Session {
    /// Empty untitled session using the configured clipboard and history limit
    pub fn new(config: &EditorConfig) -> Self {
        let clipboard = if config.system_clipboard {
            Clipboard::with_system()
        } else {
            Clipboard::new()
        };
        Self::with_clipboard(clipboard, config.history_limit)
    }

    pub fn with_clipboard(clipboard: Clipboard, history_limit: usize) -> Self {
        Self {
            state: EditorState::with_history_limit(history_limit),
            clipboard,
            file_path: None,
            is_modified: false,
            encoding: UTF_8,
            history_limit,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Unsaved changes would be lost by new/open/quit
    pub fn needs_confirmation(&self) -> bool {
        self.is_modified
    }

    /// Run an engine command, tracking unsaved changes
    pub fn execute(&mut self, command: EditCommand) -> EditResult<bool> {
        let is_load = matches!(command, EditCommand::LoadDocument(_));
        let is_editing = command.is_editing();

        let changed = self.state.execute(command, &mut self.clipboard)?;
        if is_load {
            self.is_modified = false;
        } else if is_editing && changed {
            self.is_modified = true;
        }
        Ok(changed)
    }

    /// Start over with an empty untitled document
    pub fn new_file(&mut self) {
        self.state = EditorState::with_history_limit(self.history_limit);
        self.file_path = None;
        self.is_modified = false;
        self.encoding = UTF_8;
        tracing::info!("Started new document");
    }

    /// Load a file, replacing the current document.
    ///
    /// With no `encoding` the bytes are tried as UTF-8, then GBK.
    /// On error the current document, path and history are left as they were.
    pub fn open(
        &mut self,
        path: &Path,
        encoding: Option<&'static Encoding>,
    ) -> Result<(), FileOpenError> {
        let decoded = read_text_file(path, encoding).inspect_err(|e| {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
        })?;

        self.state.load(&decoded.text);
        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;
        self.encoding = decoded.encoding;
        tracing::info!(
            "Opened {} ({} lines, encoding: {})",
            path.display(),
            self.state.document().line_count(),
            decoded.encoding.name()
        );
        Ok(())
    }

    /// Like [`Session::open`], but a missing file gives an empty document
    /// that will be created on first save
    pub fn open_or_create(
        &mut self,
        path: &Path,
        encoding: Option<&'static Encoding>,
    ) -> Result<(), FileOpenError> {
        match self.open(path, encoding) {
            Err(FileOpenError::NotFound) => {
                self.new_file();
                self.file_path = Some(path.to_path_buf());
                tracing::info!("{} does not exist yet, starting empty", path.display());
                Ok(())
            }
            result => result,
        }
    }

    /// Save to the bound path as UTF-8
    pub fn save(&mut self) -> Result<PathBuf> {
        let path = self
            .file_path
            .clone()
            .ok_or_else(|| anyhow!("No file name; use save-as PATH"))?;
        self.write_to(&path)?;
        self.is_modified = false;
        self.encoding = UTF_8;
        Ok(path)
    }

    /// Save to `path` as UTF-8 and bind the document to it
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;
        self.encoding = UTF_8;
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.state.full_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    /// Name for titles and prompts, with ` *` when modified
    pub fn display_name(&self) -> String {
        self.status().display_name()
    }

    pub fn status(&self) -> StatusInfo {
        StatusInfo::new(&self.state, self.file_path(), self.is_modified)
    }

    /// User-facing message for a failed open
    pub fn open_error_message(path: &Path, error: &FileOpenError) -> String {
        error.user_message(&filename_for_display(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::Position;

    fn session() -> Session {
        Session::with_clipboard(Clipboard::new(), 100)
    }

    #[test]
    fn test_editing_marks_modified() {
        let mut session = session();
        assert!(!session.is_modified());

        session.execute(EditCommand::Copy).unwrap();
        assert!(!session.is_modified());

        session.execute(EditCommand::Insert("x".into())).unwrap();
        assert!(session.is_modified());
        assert!(session.needs_confirmation());
    }

    #[test]
    fn test_noop_edit_does_not_mark_modified() {
        let mut session = session();
        session.execute(EditCommand::Backspace).unwrap();
        session.execute(EditCommand::Undo).unwrap();
        assert!(!session.is_modified());
    }

    #[test]
    fn test_movement_does_not_mark_modified() {
        let mut session = session();
        session
            .execute(EditCommand::LoadDocument("abc".into()))
            .unwrap();
        session
            .execute(EditCommand::MoveCursor {
                position: Position::new(0, 2),
                extend: false,
            })
            .unwrap();
        assert!(!session.is_modified());
    }

    #[test]
    fn test_new_file_keeps_clipboard() {
        let mut session = session();
        session.execute(EditCommand::Insert("keep".into())).unwrap();
        session.execute(EditCommand::SelectAll).unwrap();
        session.execute(EditCommand::Copy).unwrap();

        session.new_file();
        assert_eq!(session.state().full_text(), "");
        assert!(!session.state().can_undo());
        assert!(!session.is_modified());

        session.execute(EditCommand::Paste).unwrap();
        assert_eq!(session.state().full_text(), "keep");
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut session = session();
        session.execute(EditCommand::Insert("x".into())).unwrap();
        assert!(session.save().is_err());
        assert!(session.is_modified());
    }

    #[test]
    fn test_display_name() {
        let mut session = session();
        assert_eq!(session.display_name(), "[Untitled]");
        session.execute(EditCommand::Insert("x".into())).unwrap();
        assert_eq!(session.display_name(), "[Untitled] *");
    }
}
