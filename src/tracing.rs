//! Logging setup and diagnostics for caret/selection state transitions
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=termedit::editable=trace` - per-command selection diffs
//! - `RUST_LOG=termedit::session=debug` - file operations
//!
//! # Log Files
//!
//! Logs are written to `~/.config/termedit/logs/termedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{EditorState, Position};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with the document text
/// the shell prints on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let logs_dir = crate::config_paths::ConfigPaths::locate()
        .ok_or_else(|| anyhow::anyhow!("No config directory available"))
        .and_then(|paths| paths.ensure_logs_dir());
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "termedit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of caret/selection state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub caret: Position,
    pub anchor: Option<Position>,
    pub selection_empty: bool,
    pub line_count: usize,
    pub undo_depth: usize,
}

impl SelectionSnapshot {
    pub fn from_state(state: &EditorState) -> Self {
        let selection = state.selection();
        Self {
            caret: selection.active,
            anchor: selection.anchor,
            selection_empty: !selection.has_selection(),
            line_count: state.document().line_count(),
            undo_depth: state.history().undo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.caret != other.caret {
            changes.push(format!("caret {} → {}", self.caret, other.caret));
        }
        if self.selection_empty != other.selection_empty {
            let status = if other.selection_empty {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        } else if !other.selection_empty && self.anchor != other.anchor {
            if let Some(anchor) = other.anchor {
                changes.push(format!("anchor → {}", anchor));
            }
        }
        if self.line_count != other.line_count {
            changes.push(format!("lines {} → {}", self.line_count, other.line_count));
        }
        if self.undo_depth != other.undo_depth {
            changes.push(format!("undo depth {} → {}", self.undo_depth, other.undo_depth));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
