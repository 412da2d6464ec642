//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timeline_tictactoe::{DisplayOrder, FirstPlayerMode};
use tracing::{debug, info, instrument};

/// Settings for a play session, read from TOML and overridden by flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// How the opening player is chosen for each game.
    first_player: FirstPlayerMode,

    /// Initial order of the move list.
    display_order: DisplayOrder,

    /// Where to write logs; logging is off when unset.
    log_file: Option<PathBuf>,
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(first_player = ?config.first_player, order = ?config.display_order, "Config loaded");
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    pub fn override_with(
        mut self,
        first_player: Option<FirstPlayerMode>,
        descending: bool,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(mode) = first_player {
            self.first_player = mode;
        }
        if descending {
            self.display_order = DisplayOrder::Descending;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
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
    fn test_empty_toml_uses_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.first_player(), FirstPlayerMode::Random);
        assert_eq!(*config.display_order(), DisplayOrder::Ascending);
    }

    #[test]
    fn test_parses_all_fields() {
        let config = TuiConfig::from_toml(
            "first_player = \"o\"\ndisplay_order = \"descending\"\nlog_file = \"game.log\"\n",
        )
        .unwrap();
        assert_eq!(*config.first_player(), FirstPlayerMode::O);
        assert_eq!(*config.display_order(), DisplayOrder::Descending);
        assert_eq!(config.log_file().as_deref(), Some(Path::new("game.log")));
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let err = TuiConfig::from_toml("first_player = \"z\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = TuiConfig::from_file("/nonexistent/timeline.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = TuiConfig::from_toml("first_player = \"x\"")
            .unwrap()
            .override_with(Some(FirstPlayerMode::O), true, None);
        assert_eq!(*config.first_player(), FirstPlayerMode::O);
        assert_eq!(*config.display_order(), DisplayOrder::Descending);
        assert_eq!(*config.log_file(), None);
    }
}
