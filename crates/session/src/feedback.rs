//! Audible (or otherwise) confirmation of committed moves.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One cue fires per committed move, chosen by priority:
/// game over, then check, then capture, then a plain move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Move,
    Capture,
    Check,
    GameOver,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cue::Move => "move",
            Cue::Capture => "capture",
            Cue::Check => "check",
            Cue::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("sound asset {} not found", .0.display())]
    AssetMissing(PathBuf),
    #[error("playback failed: {0}")]
    Playback(#[from] std::io::Error),
}

/// Something that can deliver a cue to the user.
///
/// Failures are reported to the caller, which logs them; they never affect
/// game state.
pub trait Feedback {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError>;
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Remembers every cue it was asked to play.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    played: Vec<Cue>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[Cue] {
        &self.played
    }
}

impl Feedback for Recorder {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        self.played.push(cue);
        Ok(())
    }
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        (**self).play(cue)
    }
}
