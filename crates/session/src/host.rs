use chess_core::{Game, Rules};
use tracing::warn;

use crate::event::Event;
use crate::feedback::{Feedback, Silent};
use crate::session::{Effect, GameSession, SessionError};
use crate::view::{project, ViewState};

/// Owns a session and the dispatcher its cues are played through.
#[derive(Debug)]
pub struct SessionHost<R: Rules = Game, F: Feedback = Silent> {
    session: GameSession<R>,
    feedback: F,
}

impl<R: Rules, F: Feedback> SessionHost<R, F> {
    pub fn new(session: GameSession<R>, feedback: F) -> Self {
        Self { session, feedback }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Handle one event, play its cues and return a fresh projection if the
    /// board needs redrawing.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<ViewState>, SessionError> {
        let mut render = false;
        for effect in self.session.handle(event)? {
            match effect {
                Effect::Cue(cue) => {
                    if let Err(err) = self.feedback.play(cue) {
                        warn!(%cue, error = %err, "cue playback failed");
                    }
                }
                Effect::Render => render = true,
            }
        }
        Ok(render.then(|| self.view()))
    }

    pub fn view(&self) -> ViewState {
        project(&self.session)
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
