//! Standard Algebraic Notation.

use crate::board::Position;
use crate::movegen::legal_moves;
use crate::types::*;

/// SAN for `mv`, which must be legal in `pos` (the position *before* the move).
pub fn to_san(pos: &Position, mv: Move) -> String {
    let piece = match pos.piece_at(mv.from) {
        Some(p) => p,
        None => return mv.to_string(),
    };

    let mut san = String::new();

    if mv.is_castle {
        san.push_str(if mv.to.file() > mv.from.file() {
            "O-O"
        } else {
            "O-O-O"
        });
    } else {
        let is_capture = mv.is_en_passant || pos.piece_at(mv.to).is_some();

        if piece.kind == PieceKind::Pawn {
            if is_capture {
                san.push(mv.from.file_char());
            }
        } else {
            san.push(piece.kind.to_char());
            san.push_str(&disambiguation(pos, mv, piece.kind));
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());

        if let Some(promo) = mv.promo {
            san.push('=');
            san.push(promo.to_char());
        }
    }

    let mut after = pos.clone();
    after.make_move(mv);
    if after.in_check(after.side_to_move) {
        san.push(if legal_moves(&after).is_empty() {
            '#'
        } else {
            '+'
        });
    }

    san
}

/// Origin file, rank, or both when another piece of the same kind could
/// also reach the destination.
fn disambiguation(pos: &Position, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<Square> = legal_moves(pos)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| pos.piece_at(m.from).is_some_and(|p| p.kind == kind))
        .map(|m| m.from)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|s| s.file() != mv.from.file()) {
        mv.from.file_char().to_string()
    } else if rivals.iter().all(|s| s.rank() != mv.from.rank()) {
        mv.from.rank_char().to_string()
    } else {
        mv.from.to_string()
    }
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
