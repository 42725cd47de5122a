//! Minimum-length policy applied when a move sequence is submitted as a
//! password pattern. The session itself never enforces it.

use chess_session::ViewState;
use thiserror::Error;

use crate::config::PatternConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("no moves have been played")]
    Empty,
    #[error("pattern must be at least {need} half-moves long, found {have}")]
    TooShort { have: usize, need: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPolicy {
    pub min_half_moves: usize,
}

impl Default for PatternPolicy {
    fn default() -> Self {
        Self::from(&PatternConfig::default())
    }
}

impl From<&PatternConfig> for PatternPolicy {
    fn from(config: &PatternConfig) -> Self {
        Self {
            min_half_moves: config.min_half_moves,
        }
    }
}

impl PatternPolicy {
    /// The notation string to store, if the pattern is long enough.
    pub fn accept<'a>(&self, view: &'a ViewState) -> Result<&'a str, PatternError> {
        if view.notation.is_empty() {
            return Err(PatternError::Empty);
        }
        if view.half_move_count < self.min_half_moves {
            return Err(PatternError::TooShort {
                have: view.half_move_count,
                need: self.min_half_moves,
            });
        }
        Ok(&view.notation)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod pattern_tests;
