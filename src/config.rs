//! Display configuration for the terminal front-end.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Language of the status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    #[display("en")]
    En,
    /// Japanese.
    #[display("ja")]
    Ja,
}

/// How the board and status line are presented.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Language of status messages.
    #[serde(default)]
    language: Language,

    /// Symbol drawn for player X.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for player O.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Show 1-9 in empty cells.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.x_symbol.trim().is_empty() || config.o_symbol.trim().is_empty() {
            return Err(ConfigError::new("Player symbols must not be blank".to_string()));
        }
        if config.x_symbol == config.o_symbol {
            return Err(ConfigError::new(format!(
                "Player symbols must differ, both are {:?}",
                config.x_symbol
            )));
        }

        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Symbol configured for `player`.
    pub fn symbol(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_symbol,
            Player::O => &self.o_symbol,
        }
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
