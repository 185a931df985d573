//! Where termedit keeps `config.yaml` and its rolling logs
//!
//! Lookup order for the directory:
//! 1. `$TERMEDIT_CONFIG_DIR`, used as is
//! 2. `$XDG_CONFIG_HOME/termedit`, else `~/.config/termedit` (`%APPDATA%\termedit` on Windows)
//!
//! Nothing is created on lookup. Only logging asks for its directory to exist.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "termedit";
const OVERRIDE_VAR: &str = "TERMEDIT_CONFIG_DIR";

/// The termedit config directory and the files under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve from the environment. `None` when no home directory is known.
    pub fn locate() -> Option<Self> {
        if let Some(dir) = env::var_os(OVERRIDE_VAR).filter(|dir| !dir.is_empty()) {
            return Some(Self::at(dir));
        }
        platform_base().map(|base| Self::at(base.join(APP_DIR)))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    /// Create the logs directory (and the root) if missing
    pub fn ensure_logs_dir(&self) -> Result<PathBuf> {
        let logs = self.logs_dir();
        fs::create_dir_all(&logs)
            .with_context(|| format!("Failed to create directory {}", logs.display()))?;
        Ok(logs)
    }
}

#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_root() {
        let paths = ConfigPaths::at("/tmp/termedit-conf");
        assert_eq!(paths.root(), Path::new("/tmp/termedit-conf"));
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/termedit-conf/config.yaml")
        );
        assert_eq!(paths.logs_dir(), PathBuf::from("/tmp/termedit-conf/logs"));
    }

    #[test]
    fn test_ensure_logs_dir_creates_missing_parents() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::at(temp.path().join("nested").join("termedit"));

        let logs = paths.ensure_logs_dir().unwrap();
        assert!(logs.is_dir());
        assert_eq!(logs, paths.logs_dir());
        // Second call is a no-op
        assert!(paths.ensure_logs_dir().is_ok());
    }

    #[test]
    fn test_located_dir_is_named_for_app() {
        if env::var_os(OVERRIDE_VAR).is_some() {
            return;
        }
        if let Some(paths) = ConfigPaths::locate() {
            assert!(paths.root().ends_with(APP_DIR));
        }
    }
}
