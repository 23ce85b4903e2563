//! Replay tool settings
//!
//! Loads [`ReplaySettings`] from a JSON file. An explicit path wins; otherwise
//! `settings.json` in the platform config directory is used
//! (e.g. `~/.config/ChessRules/settings.json` on Linux).
//!
//! # Error Handling
//!
//! A missing file is not an error and yields [`ReplaySettings::default`]. A file
//! that cannot be read or parsed is returned as a [`SettingsError`]; the caller
//! decides how to report it and falls back to defaults. Settings are loaded
//! before any subscriber exists, so nothing is logged here.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// A settings file that exists but could not be used
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings file at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-tunable behaviour of the `chess_replay` binary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaySettings {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Print the final snapshot as indented JSON
    pub pretty_json: bool,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        ReplaySettings {
            log_filter: "chess_rules=info,chess_replay=info".to_string(),
            pretty_json: false,
        }
    }
}

impl ReplaySettings {
    /// Load settings from `path`, or from the default location if `None`
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<ReplaySettings, SettingsError> {
        let settings_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_settings_path(),
        };

        if !settings_path.exists() {
            return Ok(ReplaySettings::default());
        }

        let contents = fs::read_to_string(&settings_path).map_err(|source| SettingsError::Read {
            path: settings_path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: settings_path,
            source,
        })
    }
}

/// Resolve the default settings path, falling back to the working directory
fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "ChessRules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}
