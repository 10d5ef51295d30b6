//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_boxes_core::{Messages, Player};
use tracing::{debug, info, instrument};

/// Top-level configuration.
///
/// Every key is optional; a missing file or section falls back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct BoxesConfig {
    /// Player names and marks.
    #[serde(default)]
    players: PlayersConfig,

    /// Finish-screen texts.
    #[serde(default)]
    messages: MessagesConfig,

    /// Log destination and filter.
    #[serde(default)]
    logging: LoggingConfig,
}

/// Player names and board marks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayersConfig {
    /// Badge label for player one.
    #[serde(default = "default_one_name")]
    one_name: String,

    /// Badge label for player two.
    #[serde(default = "default_two_name")]
    two_name: String,

    /// Mark drawn on cells claimed by player one.
    #[serde(default = "default_one_mark")]
    one_mark: String,

    /// Mark drawn on cells claimed by player two.
    #[serde(default = "default_two_mark")]
    two_mark: String,
}

/// Texts shown when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Win template; `{player}` is replaced with the winner's mark.
    #[serde(default = "default_win")]
    win: String,

    /// Tie text.
    #[serde(default = "default_tie")]
    tie: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,
}

fn default_one_name() -> String {
    "Player 1".to_string()
}

fn default_two_name() -> String {
    "Player 2".to_string()
}

fn default_one_mark() -> String {
    Player::One.mark().to_string()
}

fn default_two_mark() -> String {
    Player::Two.mark().to_string()
}

fn default_win() -> String {
    Messages::default().win
}

fn default_tie() -> String {
    Messages::default().tie
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_boxes.log")
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one_name: default_one_name(),
            two_name: default_two_name(),
            one_mark: default_one_mark(),
            two_mark: default_two_mark(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            win: default_win(),
            tie: default_tie(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

impl BoxesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serializes the configuration back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Mark configured for `player`.
    pub fn mark(&self, player: Player) -> &str {
        match player {
            Player::One => &self.players.one_mark,
            Player::Two => &self.players.two_mark,
        }
    }

    /// Badge name configured for `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.players.one_name,
            Player::Two => &self.players.two_name,
        }
    }

    /// Finish-screen texts for the game controller.
    pub fn game_messages(&self) -> Messages {
        Messages {
            win: self.messages.win.clone(),
            tie: self.messages.tie.clone(),
            marks: [
                self.players.one_mark.clone(),
                self.players.two_mark.clone(),
            ],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (one, two) = (self.players.one_mark.trim(), self.players.two_mark.trim());
        if one.is_empty() || two.is_empty() {
            return Err(ConfigError::new("Player marks must not be empty".to_string()));
        }
        if one == two {
            return Err(ConfigError::new(format!(
                "Both players use the mark '{}'",
                one
            )));
        }
        Ok(())
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
