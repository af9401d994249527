//! Configuration and settings persistence.
//!
//! Settings are loaded once at session start, stored as pretty JSON in the
//! platform config directory, and mutated only by explicit user
//! reconfiguration.

mod settings;

pub use settings::{AiSettings, PrivacySettings, ProviderSettings, Settings};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

/// Errors while loading or storing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory could be resolved.
    #[error("could not resolve a config directory for this platform")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),

    /// The settings file exists but is not valid JSON for [`Settings`].
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Settings {
    /// Default settings file location (`<platform config dir>/missive/settings.json`).
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("com", "panbanda", "missive")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads settings from `path`, returning defaults when the file does not
    /// exist yet.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persists settings to `path` as pretty JSON, creating parent
    /// directories as needed.
    pub fn store(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
