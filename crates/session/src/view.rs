//! Render-ready projection of a session.

use std::fmt;

use chess_core::{BoardGrid, Color, Piece, PieceKind, Rules, Square};
use serde::{Serialize, Serializer};

use crate::session::{GameSession, MoveSquares};

/// Headline shown above the board, most important condition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Checkmate,
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// Any other draw (the fifty-move rule)
    Draw,
    Check,
    None,
}

impl GameStatus {
    pub fn of<R: Rules>(rules: &R) -> Self {
        if rules.is_checkmate() {
            GameStatus::Checkmate
        } else if rules.is_stalemate() {
            GameStatus::Stalemate
        } else if rules.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if rules.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if rules.is_draw() {
            GameStatus::Draw
        } else if rules.is_in_check() {
            GameStatus::Check
        } else {
            GameStatus::None
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Checkmate => "Checkmate!",
            GameStatus::Stalemate => "Stalemate!",
            GameStatus::ThreefoldRepetition => "Threefold repetition!",
            GameStatus::InsufficientMaterial => "Insufficient material!",
            GameStatus::Draw => "Draw!",
            GameStatus::Check => "Check!",
            GameStatus::None => "",
        };
        f.write_str(text)
    }
}

impl Serialize for GameStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything a surface needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Row 0 is rank 8, column 0 is file a
    pub board: BoardGrid,
    pub selected_square: Option<Square>,
    pub legal_destinations: Vec<Square>,
    pub side_to_move: Color,
    pub in_check: bool,
    /// King of the side to move, when it is in check
    pub checked_king: Option<Square>,
    pub last_move: Option<MoveSquares>,
    /// SAN of every half-move, space separated
    pub notation: String,
    pub half_move_count: usize,
    /// Side whose pawn is waiting for a promotion piece
    pub awaiting_promotion: Option<Color>,
    pub is_game_over: bool,
    pub status: GameStatus,
    pub fen: String,
}

/// Project a session. Pure: the same session always gives the same view.
pub fn project<R: Rules>(session: &GameSession<R>) -> ViewState {
    let rules = session.rules();
    let side_to_move = rules.side_to_move();
    let in_check = rules.is_in_check();

    let checked_king = if in_check {
        let king = Piece::new(side_to_move, PieceKind::King);
        Square::all().find(|&sq| rules.piece_at(sq) == Some(king))
    } else {
        None
    };

    ViewState {
        board: rules.board_snapshot(),
        selected_square: session.selected_square(),
        legal_destinations: session.legal_destinations().to_vec(),
        side_to_move,
        in_check,
        checked_king,
        last_move: session.last_move(),
        notation: rules.history_notation().join(" "),
        half_move_count: session.move_history().len(),
        awaiting_promotion: session.pending_promotion().map(|_| side_to_move),
        is_game_over: rules.is_game_over(),
        status: GameStatus::of(rules),
        fen: rules.fen(),
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
