//! Terminal surface for recording a chess move sequence as a password
//! pattern.

pub mod command;
pub mod config;
pub mod cues;
pub mod pattern;
pub mod render;
pub mod repl;

pub use command::{parse_event_json, Command, CommandError};
pub use config::{Config, ConfigError, CueConfig, LogConfig, PatternConfig};
pub use cues::AssetFeedback;
pub use pattern::{PatternError, PatternPolicy};
pub use render::{render_board, render_view};
pub use repl::{Mode, Repl};
