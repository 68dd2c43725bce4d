//! Game configuration loaded from a TOML file.

use crate::game::{Mark, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Player names and marks for a session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player in the first seat.
    #[serde(default = "default_first_name")]
    first_name: String,

    /// Mark symbol for the first seat (a single character).
    #[serde(default = "default_first_mark")]
    first_mark: String,

    /// Name of the player in the second seat.
    #[serde(default = "default_second_name")]
    second_name: String,

    /// Mark symbol for the second seat (a single character).
    #[serde(default = "default_second_mark")]
    second_mark: String,
}

#[instrument]
fn default_first_name() -> String {
    "Player X".to_string()
}

#[instrument]
fn default_first_mark() -> String {
    "X".to_string()
}

#[instrument]
fn default_second_name() -> String {
    "Player O".to_string()
}

#[instrument]
fn default_second_mark() -> String {
    "O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            first_mark: default_first_mark(),
            second_name: default_second_name(),
            second_mark: default_second_mark(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = %config.first_name, second = %config.second_name, "Config loaded");
        Ok(config)
    }

    /// Replaces the configured marks with command-line overrides.
    pub fn override_marks(&mut self, first: Option<char>, second: Option<char>) {
        if let Some(symbol) = first {
            self.first_mark = symbol.to_string();
        }
        if let Some(symbol) = second {
            self.second_mark = symbol.to_string();
        }
    }

    /// Builds the two players, validating both marks.
    #[instrument(skip(self))]
    pub fn players(&self) -> Result<[Player; 2], ConfigError> {
        Ok([
            Self::player(&self.first_name, &self.first_mark)?,
            Self::player(&self.second_name, &self.second_mark)?,
        ])
    }

    fn player(name: &str, mark: &str) -> Result<Player, ConfigError> {
        let mut symbols = mark.chars();
        let symbol = symbols
            .next()
            .ok_or_else(|| ConfigError::new(format!("Mark for {} is empty", name)))?;
        if symbols.next().is_some() {
            return Err(ConfigError::new(format!(
                "Mark '{}' for {} must be a single character",
                mark, name
            )));
        }
        let mark = Mark::new(symbol).map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(Player::new(name, mark))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
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
    use std::io::Write;

    #[test]
    fn defaults_are_playable() {
        let players = GameConfig::default().players().unwrap();
        assert_eq!(players[0].mark().symbol(), 'X');
        assert_eq!(players[1].mark().symbol(), 'O');
        assert_ne!(players[0].mark(), players[1].mark());
    }

    #[test]
    fn loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first_name = \"Ada\"").unwrap();
        writeln!(file, "first_mark = \"♡\"").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();

        let players = config.players().unwrap();
        assert_eq!(players[0].name(), "Ada");
        assert_eq!(players[0].mark().symbol(), '♡');
        // Unset fields fall back to defaults.
        assert_eq!(players[1].name(), "Player O");
    }

    #[test]
    fn rejects_multi_character_marks() {
        let mut config = GameConfig::default();
        config.first_mark = "XX".to_string();
        assert!(config.players().is_err());
    }

    #[test]
    fn rejects_blank_marks() {
        let mut config = GameConfig::default();
        config.second_mark = " ".to_string();
        assert!(config.players().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GameConfig::from_file("does-not-exist.toml").is_err());
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut config = GameConfig::default();
        config.override_marks(Some('♞'), None);
        let players = config.players().unwrap();
        assert_eq!(players[0].mark().symbol(), '♞');
        assert_eq!(players[1].mark().symbol(), 'O');
    }
}
