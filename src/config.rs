//! TOML configuration for the game binary.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::DEFAULT_DRAW_MESSAGE;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timetravel.toml";

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Initial move-list order.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,

    /// Status text for a drawn game.
    #[serde(default = "default_draw_message")]
    draw_message: String,
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    file: PathBuf,
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Display preferences.
    #[serde(default)]
    display: DisplaySettings,

    /// Logging preferences.
    #[serde(default)]
    logging: LoggingSettings,
}

fn default_sort_ascending() -> bool {
    true
}

fn default_draw_message() -> String {
    DEFAULT_DRAW_MESSAGE.to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timetravel.log")
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            sort_ascending: default_sort_ascending(),
            draw_message: default_draw_message(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or returns defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log file.
    pub fn set_log_file(&mut self, file: PathBuf) {
        self.logging.file = file;
    }

    /// Overrides the initial move-list order.
    pub fn set_sort_ascending(&mut self, ascending: bool) {
        self.display.sort_ascending = ascending;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[display]\ndraw_message = \"Remis\"\n").unwrap();
        assert_eq!(settings.display().draw_message(), "Remis");
        assert!(*settings.display().sort_ascending());
        assert_eq!(settings.logging().filter(), "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = toml::from_str::<Settings>("display = 3").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
