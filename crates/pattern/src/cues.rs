use std::io::Write;
use std::path::PathBuf;

use chess_session::{Cue, Feedback, FeedbackError};
use tracing::debug;

use crate::config::CueConfig;

/// Announces cues on a terminal, provided the matching sound asset exists.
///
/// There is no audio backend: a cue "plays" by checking its asset and
/// writing a short line to `out`.
#[derive(Debug)]
pub struct AssetFeedback<W: Write> {
    config: CueConfig,
    out: W,
}

impl<W: Write> AssetFeedback<W> {
    pub fn new(config: CueConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn asset_path(&self, cue: Cue) -> PathBuf {
        let file = match cue {
            Cue::Move => &self.config.move_sound,
            Cue::Capture => &self.config.capture,
            Cue::Check => &self.config.check,
            Cue::GameOver => &self.config.game_over,
        };
        self.config.dir.join(file)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Feedback for AssetFeedback<W> {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        let path = self.asset_path(cue);
        if !path.is_file() {
            return Err(FeedbackError::AssetMissing(path));
        }
        debug!(%cue, asset = %path.display(), "playing cue");
        writeln!(self.out, "♪ {cue}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "cues_tests.rs"]
mod cues_tests;
