//! The interaction state machine.
//!
//! Clicks, drags and promotion choices are turned into validated moves. The
//! session never touches the position itself: every change goes through
//! [`Rules::apply_move`].

use chess_core::{AppliedMove, FenError, Game, PieceKind, Rules, Square};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::event::Event;
use crate::feedback::Cue;

#[derive(Debug, Error)]
pub enum SessionError {
    /// No starting position could be obtained; the session cannot go on.
    #[error("rules engine could not provide a starting position: {0}")]
    EngineUnavailable(#[from] FenError),
}

/// Where the user is in the select/move/promote cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    PieceSelected {
        square: Square,
        destinations: Vec<Square>,
    },
    AwaitingPromotion {
        from: Square,
        to: Square,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveSquares {
    pub from: Square,
    pub to: Square,
}

/// A committed half-move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub captured: bool,
    pub san: String,
}

impl From<AppliedMove> for MoveRecord {
    fn from(applied: AppliedMove) -> Self {
        Self {
            from: applied.from,
            to: applied.to,
            promotion: applied.promotion,
            captured: applied.is_capture,
            san: applied.san,
        }
    }
}

/// What the caller should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Cue(Cue),
    /// The session changed; re-project and redraw.
    Render,
}

/// One game as seen by one presentation surface.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rules = Game> {
    rules: R,
    interaction: Interaction,
    move_history: Vec<MoveRecord>,
    last_move: Option<MoveSquares>,
    /// Position that `reset` returns to; the standard start when `None`
    start_fen: Option<String>,
}

impl<R: Rules> Default for GameSession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rules> GameSession<R> {
    pub fn new() -> Self {
        Self::fresh(R::new_game())
    }

    /// A session whose games (including those after a reset) start from `fen`.
    pub fn with_start_fen(fen: impl Into<String>) -> Result<Self, SessionError> {
        let fen = fen.into();
        let rules = R::from_fen(&fen)?;
        Ok(Self {
            start_fen: Some(fen),
            ..Self::fresh(rules)
        })
    }

    /// `rules` must have no moves played: the history starts empty and has
    /// to stay in step with `Rules::history_notation`.
    fn fresh(rules: R) -> Self {
        Self {
            rules,
            interaction: Interaction::Idle,
            move_history: Vec::new(),
            last_move: None,
            start_fen: None,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self.interaction {
            Interaction::PieceSelected { square, .. } => Some(square),
            _ => None,
        }
    }

    pub fn legal_destinations(&self) -> &[Square] {
        match &self.interaction {
            Interaction::PieceSelected { destinations, .. } => destinations,
            _ => &[],
        }
    }

    pub fn pending_promotion(&self) -> Option<MoveSquares> {
        match self.interaction {
            Interaction::AwaitingPromotion { from, to } => Some(MoveSquares { from, to }),
            _ => None,
        }
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<MoveSquares> {
        self.last_move
    }

    pub fn start_fen(&self) -> Option<&str> {
        self.start_fen.as_deref()
    }

    /// Apply one input event. Only `Reset` can fail.
    #[instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, SessionError> {
        if let Interaction::AwaitingPromotion { from, to } = self.interaction {
            return match event {
                Event::PromotionChosen { piece } => {
                    self.interaction = Interaction::Idle;
                    Ok(self.commit(from, to, Some(piece)))
                }
                Event::Reset => self.reset().map(|()| vec![Effect::Render]),
                _ => {
                    debug!("board input ignored while a promotion is pending");
                    Ok(Vec::new())
                }
            };
        }

        let effects = match event {
            Event::SquareClicked { square } => self.click(square),
            Event::DragStarted { square } => self.drag(square),
            Event::Dropped { from, to } => self.drop_on(from, to),
            Event::PromotionChosen { .. } => {
                debug!("no promotion pending");
                Vec::new()
            }
            Event::Reset => {
                self.reset()?;
                vec![Effect::Render]
            }
        };
        Ok(effects)
    }

    /// Start over from the configured position, discarding the whole game.
    ///
    /// On failure the session keeps its previous state and the error must be
    /// treated as fatal by the caller.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let rules = match &self.start_fen {
            Some(fen) => R::from_fen(fen)?,
            None => R::new_game(),
        };
        self.rules = rules;
        self.interaction = Interaction::Idle;
        self.move_history.clear();
        self.last_move = None;
        info!("session reset");
        Ok(())
    }

    fn click(&mut self, sq: Square) -> Vec<Effect> {
        let from = match &self.interaction {
            Interaction::PieceSelected {
                square,
                destinations,
            } if destinations.contains(&sq) => Some(*square),
            _ => None,
        };

        match from {
            Some(from) => self.target(from, sq),
            None => {
                // Clicking anything else reselects or deselects
                if !self.select(sq) {
                    self.interaction = Interaction::Idle;
                }
                vec![Effect::Render]
            }
        }
    }

    fn drag(&mut self, sq: Square) -> Vec<Effect> {
        if self.select(sq) {
            vec![Effect::Render]
        } else {
            Vec::new()
        }
    }

    fn drop_on(&mut self, from: Square, to: Square) -> Vec<Effect> {
        if self.is_movable(from) && self.rules.legal_moves_from(from).contains(&to) {
            return self.target(from, to);
        }
        debug!(%from, %to, "drop on a square that is not a legal destination");
        self.interaction = Interaction::Idle;
        vec![Effect::Render]
    }

    fn is_movable(&self, sq: Square) -> bool {
        self.rules
            .piece_at(sq)
            .is_some_and(|p| p.color == self.rules.side_to_move())
    }

    /// Select `sq` if it holds a piece of the side to move.
    fn select(&mut self, sq: Square) -> bool {
        if !self.is_movable(sq) {
            return false;
        }
        let destinations = self.rules.legal_moves_from(sq);
        debug!(square = %sq, count = destinations.len(), "piece selected");
        self.interaction = Interaction::PieceSelected {
            square: sq,
            destinations,
        };
        true
    }

    /// `to` is a legal destination of the piece on `from`.
    fn target(&mut self, from: Square, to: Square) -> Vec<Effect> {
        if self.is_promotion(from, to) {
            debug!(%from, %to, "awaiting promotion choice");
            self.interaction = Interaction::AwaitingPromotion { from, to };
            return vec![Effect::Render];
        }
        self.interaction = Interaction::Idle;
        self.commit(from, to, None)
    }

    fn is_promotion(&self, from: Square, to: Square) -> bool {
        let is_pawn = self
            .rules
            .piece_at(from)
            .is_some_and(|p| p.kind == PieceKind::Pawn);
        is_pawn && (to.rank() == 0 || to.rank() == 7)
    }

    fn commit(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> Vec<Effect> {
        match self.rules.apply_move(from, to, promotion) {
            Ok(applied) => {
                let cue = self.cue_for(&applied);
                info!(san = %applied.san, %from, %to, %cue, "move committed");
                self.last_move = Some(MoveSquares { from, to });
                self.move_history.push(applied.into());
                vec![Effect::Cue(cue), Effect::Render]
            }
            Err(err) => {
                warn!(%from, %to, error = %err, "move rejected by rules engine");
                vec![Effect::Render]
            }
        }
    }

    fn cue_for(&self, applied: &AppliedMove) -> Cue {
        if self.rules.is_game_over() {
            Cue::GameOver
        } else if applied.resulting_check {
            Cue::Check
        } else if applied.is_capture {
            Cue::Capture
        } else {
            Cue::Move
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
