//! Session clipboard.
//!
//! One slot holding the most recently cut or copied text. It lives as long as
//! the editing session and is shared by every document opened in it, so
//! text cut from one file can be pasted into the next. Undo never touches it.
//!
//! Optionally mirrors to the system clipboard via `arboard`. The mirror is
//! best-effort: when no system clipboard is reachable (headless sessions,
//! SSH) the local slot keeps working on its own.

use std::fmt;

/// Holder for cut/copied text
#[derive(Default)]
pub struct Clipboard {
    text: String,
    system: Option<arboard::Clipboard>,
}

impl fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard")
            .field("text", &self.text)
            .field("system", &self.system.is_some())
            .finish()
    }
}

impl Clipboard {
    /// A process-local clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard mirrored to the system clipboard when one is available
    pub fn with_system() -> Self {
        let system = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::debug!("System clipboard unavailable, using local clipboard: {}", e);
                None
            }
        };
        Self {
            text: String::new(),
            system,
        }
    }

    /// Whether the system clipboard mirror is active
    pub fn is_system(&self) -> bool {
        self.system.is_some()
    }

    /// Replace the clipboard content
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        if let Some(system) = self.system.as_mut() {
            if let Err(e) = system.set_text(text) {
                tracing::warn!("Failed to write system clipboard: {}", e);
            }
        }
    }

    /// Current clipboard content (empty when nothing was copied).
    ///
    /// With a system mirror, text copied by other applications wins over the
    /// local slot.
    pub fn get(&mut self) -> String {
        if let Some(system) = self.system.as_mut() {
            match system.get_text() {
                Ok(text) if !text.is_empty() => return text,
                Ok(_) => {}
                Err(e) => tracing::debug!("System clipboard read failed: {}", e),
            }
        }
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clipboard_is_empty() {
        let mut clipboard = Clipboard::new();
        assert!(!clipboard.is_system());
        assert_eq!(clipboard.get(), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut clipboard = Clipboard::new();
        clipboard.set("first");
        clipboard.set("second\nline");
        assert_eq!(clipboard.get(), "second\nline");
    }

    #[test]
    fn test_debug_hides_system_handle() {
        let clipboard = Clipboard::new();
        let debug = format!("{:?}", clipboard);
        assert!(debug.contains("system: false"));
    }
}
