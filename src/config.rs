//! Editor configuration
//!
//! Reads user preferences from `~/.config/termedit/config.yaml`:
//!
//! ```yaml
//! history_limit: 500
//! system_clipboard: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_HISTORY_LIMIT;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of undo steps kept per document (0 disables undo)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Mirror cut/copy to the system clipboard when one is available
    #[serde(default = "default_system_clipboard")]
    pub system_clipboard: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_system_clipboard() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            system_clipboard: default_system_clipboard(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(paths) = crate::config_paths::ConfigPaths::locate() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&paths.config_file())
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config YAML. An empty document yields defaults.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.history_limit, 1000);
        assert!(config.system_clipboard);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = EditorConfig::parse("history_limit: 5\n").unwrap();
        assert_eq!(config.history_limit, 5);
        assert!(config.system_clipboard);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EditorConfig::parse("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(EditorConfig::parse("history_limit: lots").is_err());
    }
}
