//! Command-line argument parsing
//!
//! Supports:
//! - Opening a file (created on first save if missing)
//! - Jump to line/column
//! - Reading the file in a named encoding
//! - Overriding config values for one run

use clap::Parser;
use encoding_rs::Encoding;
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::editable::Position;
use crate::util::encoding_for_label;

/// A small line-oriented text editor
#[derive(Parser, Debug)]
#[command(name = "termedit", version, about = "A small line-oriented text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Go to line N
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Read PATH in this encoding (default: UTF-8, then GBK)
    #[arg(long, value_name = "NAME")]
    pub encoding: Option<String>,

    /// Keep cut/copy inside termedit instead of the system clipboard
    #[arg(long)]
    pub local_clipboard: bool,

    /// Number of undo steps to keep
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// File to open, if any
    pub path: Option<PathBuf>,
    /// Initial caret position - 1-indexed from user, converted to 0-indexed
    pub initial_position: Option<Position>,
    /// Explicit encoding for the file
    pub encoding: Option<&'static Encoding>,
    /// Force the process-local clipboard
    pub local_clipboard: bool,
    /// Override for the configured history limit
    pub history_limit: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("Cannot open directory: {}", path.display()));
            }
        }

        let encoding = match &self.encoding {
            Some(label) => Some(encoding_for_label(label).map_err(|e| e.to_string())?),
            None => None,
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            Position::new(line_0, col_0)
        });

        Ok(StartupConfig {
            path: self.path,
            initial_position,
            encoding,
            local_clipboard: self.local_clipboard,
            history_limit: self.history_limit,
        })
    }
}

impl StartupConfig {
    /// Apply command-line overrides on top of the file config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if self.local_clipboard {
            config.system_clipboard = false;
        }
        if let Some(limit) = self.history_limit {
            config.history_limit = limit;
        }
    }
}
