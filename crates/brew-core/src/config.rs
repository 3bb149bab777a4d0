//! User configuration.
//!
//! Settings live in a small JSON file. By default it is looked up following
//! the XDG Base Directory specification at
//! `$XDG_CONFIG_HOME/brew/config.json` (usually `~/.config/brew/config.json`).
//! A missing default file is not an error; every field falls back to its
//! default. An explicitly requested file must exist.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::BrewError,
    timer::DEFAULT_VOLUME,
    Result,
};

/// Name of the configuration file inside the XDG config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings that shape a brew session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cue volume in `[0, 1]`
    pub volume: f32,
    /// Rich terminal output
    pub color: bool,
    /// Tick during the preparation countdown
    pub preparation_cues: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            color: true,
            preparation_cues: true,
        }
    }
}

impl Config {
    /// Reads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::FileSystem` if the file cannot be read,
    /// `BrewError::Serialization` if it is not valid JSON for this structure,
    /// and `BrewError::Configuration` if a value is out of range.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| BrewError::file_system(path, e))?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()
    }

    /// Loads `path` if given, otherwise the XDG default if one exists,
    /// otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(found) => {
                    log::debug!("Loading configuration from {}", found.display());
                    Self::load(&found)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Existing configuration file under the XDG config directories.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("brew").find_config_file(CONFIG_FILE_NAME)
    }

    /// Checks every value is in range.
    pub fn validate(self) -> Result<Self> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(BrewError::Configuration {
                message: format!("volume must be between 0 and 1, got {}", self.volume),
            });
        }
        Ok(self)
    }
}
