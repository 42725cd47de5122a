//! TOML configuration. Every field has a default, so an empty file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Position every game starts from (and returns to on reset)
    pub start_fen: Option<String>,
    pub pattern: PatternConfig,
    pub cues: CueConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Fewest half-moves a submitted pattern may contain
    pub min_half_moves: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        // "More than 20 moves"
        Self { min_half_moves: 21 }
    }
}

/// Sound asset file names, resolved against `dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CueConfig {
    pub dir: PathBuf,
    #[serde(rename = "move")]
    pub move_sound: String,
    pub capture: String,
    pub check: String,
    pub game_over: String,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("sounds"),
            move_sound: "move.mp3".to_string(),
            capture: "capture.mp3".to_string(),
            check: "check.mp3".to_string(),
            game_over: "game_end.mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
