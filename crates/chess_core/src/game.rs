//! A full game: position plus the history needed for notation and
//! repetition detection.

use thiserror::Error;

use crate::Rules;
use crate::board::{FenError, Position};
use crate::movegen::legal_moves;
use crate::san::to_san;
use crate::types::*;

/// Why `apply_move` refused a move. The game is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {0} does not belong to the side to move")]
    WrongSide(Square),
    #[error("{from}{to} is not a legal move")]
    Unreachable { from: Square, to: Square },
    #[error("{from}{to} promotes and needs a promotion piece")]
    PromotionRequired { from: Square, to: Square },
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
}

/// What a successful `apply_move` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub is_capture: bool,
    /// The side now to move is in check.
    pub resulting_check: bool,
    pub san: String,
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    /// Zobrist key of every position reached, starting position included
    hashes: Vec<u64>,
    notation: Vec<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_position(Position::startpos())
    }
}

impl Game {
    pub fn from_position(position: Position) -> Self {
        let hashes = vec![position.zobrist_hash()];
        Self {
            position,
            hashes,
            notation: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    fn resolve(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, IllegalMove> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or(IllegalMove::NoPiece(from))?;
        if piece.color != self.position.side_to_move {
            return Err(IllegalMove::WrongSide(from));
        }

        let candidates: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|m| m.from == from && m.to == to)
            .collect();
        let first = *candidates
            .first()
            .ok_or(IllegalMove::Unreachable { from, to })?;

        // A promotion piece handed to a non-promoting move is ignored
        if first.promo.is_none() {
            return Ok(first);
        }
        let kind = promotion.ok_or(IllegalMove::PromotionRequired { from, to })?;
        candidates
            .into_iter()
            .find(|m| m.promo == Some(kind))
            .ok_or(IllegalMove::InvalidPromotion(kind))
    }
}

impl Rules for Game {
    fn new_game() -> Self {
        Self::default()
    }

    fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    fn legal_moves_from(&self, sq: Square) -> Vec<Square> {
        let mut out: Vec<Square> = Vec::new();
        for mv in self.legal_moves().into_iter().filter(|m| m.from == sq) {
            if !out.contains(&mv.to) {
                out.push(mv.to);
            }
        }
        out
    }

    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<AppliedMove, IllegalMove> {
        let mv = self.resolve(from, to, promotion)?;

        let san = to_san(&self.position, mv);
        let is_capture = mv.is_en_passant || self.position.piece_at(mv.to).is_some();

        self.position.make_move(mv);
        self.hashes.push(self.position.zobrist_hash());
        self.notation.push(san.clone());

        Ok(AppliedMove {
            from,
            to,
            promotion: mv.promo,
            is_capture,
            resulting_check: self.position.in_check(self.position.side_to_move),
            san,
        })
    }

    fn is_in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }

    fn is_threefold_repetition(&self) -> bool {
        let current = self.position.zobrist_hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_fifty_move_draw(&self) -> bool {
        self.position.is_fifty_move_draw()
    }

    fn board_snapshot(&self) -> BoardGrid {
        let mut grid: BoardGrid = [[None; 8]; 8];
        for s in Square::all() {
            grid[(7 - s.rank()) as usize][s.file() as usize] = self.position.piece_at(s);
        }
        grid
    }

    fn history_notation(&self) -> &[String] {
        &self.notation
    }

    fn fen(&self) -> String {
        self.position.to_fen()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
