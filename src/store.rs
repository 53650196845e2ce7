//! Persistence for the small per-user preference record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::definitions::LanguageCode;

const PREFERENCES_FILE: &str = ".Lumb_os_user.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed preferences in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The persisted `{lang, username}` record.
///
/// Keys the program does not know about are kept in `extra` so a save never
/// drops them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(
        default,
        deserialize_with = "lenient_language",
        skip_serializing_if = "Option::is_none"
    )]
    pub lang: Option<LanguageCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// An unrecognised language code means "not chosen yet", not a corrupt file.
fn lenient_language<'de, D>(deserializer: D) -> Result<Option<LanguageCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(LanguageCode::from_code))
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store at its usual place in the user's home directory.
    pub fn in_home() -> Self {
        let home = home_directory().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record, falling back to an empty one on any failure.
    pub fn load(&self) -> UserPreferences {
        if !self.path.exists() {
            debug!("No preference file at {}", self.path.display());
            return UserPreferences::default();
        }
        match self.try_load() {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!("Ignoring unreadable preferences: {}", err);
                UserPreferences::default()
            }
        }
    }

    /// Saves the record; failures are logged and otherwise ignored.
    pub fn save(&self, prefs: &UserPreferences) {
        if let Err(err) = self.try_save(prefs) {
            warn!("Could not persist preferences: {}", err);
        }
    }

    pub fn try_load(&self) -> Result<UserPreferences, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn try_save(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        let raw = serde_json::to_string(prefs).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

pub(crate) fn home_directory() -> Option<PathBuf> {
    if cfg!(windows) {
        std::env::var("USERPROFILE").map(PathBuf::from).ok()
    } else {
        std::env::var("HOME").map(PathBuf::from).ok()
    }
}
