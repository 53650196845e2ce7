use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::home_directory;

const CONFIG_ENV: &str = "LUMB_CONFIG";
const CONFIG_FILE: &str = ".lumb.toml";

/// Optional overrides read from `~/.lumb.toml` (or the file named by
/// `LUMB_CONFIG`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the `{lang, username}` record lives.
    pub preferences_path: Option<PathBuf>,
    /// Browser executables to try before the generic URL opener. Empty means
    /// the platform's built-in candidates.
    pub browser_paths: Vec<PathBuf>,
}

impl Settings {
    /// Reads the settings file if there is one. A missing file yields the
    /// defaults; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        let parsed: Settings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings: {}", path.display()))?;
        Ok(parsed)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(explicit) = env::var(CONFIG_ENV)
            && !explicit.trim().is_empty()
        {
            return Some(PathBuf::from(explicit));
        }
        home_directory().map(|home| home.join(CONFIG_FILE))
    }
}
