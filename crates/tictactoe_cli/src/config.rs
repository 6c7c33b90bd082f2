//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Mark that opens every round.
    #[serde(default = "default_starting_mark")]
    starting_mark: Mark,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show empty cells as their index (0-8) to help with input.
    #[serde(default = "default_show_positions")]
    show_positions: bool,
}

fn default_starting_mark() -> Mark {
    Mark::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_positions() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            starting_mark: default_starting_mark(),
            log_filter: default_log_filter(),
            show_positions: default_show_positions(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(starting_mark = %config.starting_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the starting mark.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }
}

/// Error loading host configuration.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = HostConfig::from_toml("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(*config.starting_mark(), Mark::X);
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_positions());
    }

    #[test]
    fn test_partial_toml() {
        let config = HostConfig::from_toml("starting_mark = \"O\"\n").unwrap();
        assert_eq!(*config.starting_mark(), Mark::O);
        assert!(*config.show_positions());
    }

    #[test]
    fn test_bad_mark_rejected() {
        let err = HostConfig::from_toml("starting_mark = \"Z\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_override_mark() {
        let config = HostConfig::default().with_starting_mark(Mark::O);
        assert_eq!(*config.starting_mark(), Mark::O);
    }
}
