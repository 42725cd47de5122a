use super::*;
use crate::types::{Color, PieceKind};
use std::collections::HashSet;

#[test]
fn test_keys_are_distinct() {
    let unique: HashSet<u64> = ZOBRIST.all().iter().copied().collect();
    assert_eq!(unique.len(), 781);
    assert!(!unique.contains(&0));
}

#[test]
fn test_piece_key_depends_on_square_and_piece() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let knight = Piece::new(Color::White, PieceKind::Knight);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece(pawn, Square::A1), ZOBRIST.piece(pawn, Square::B1));
    assert_ne!(ZOBRIST.piece(pawn, Square::A1), ZOBRIST.piece(knight, Square::A1));
    assert_ne!(ZOBRIST.piece(pawn, Square::A1), ZOBRIST.piece(black_pawn, Square::A1));
}

#[test]
fn test_table_is_reproducible() {
    let again = ZobristKeys::from_seed(0x00C4_E55F_A77E_2200);
    assert_eq!(again.all(), ZOBRIST.all());
    assert_ne!(ZobristKeys::from_seed(1).all(), ZOBRIST.all());
}
