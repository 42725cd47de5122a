//! Tests for game termination through the `Rules` interface
//!
//! This module tests all end conditions:
//! - Checkmate
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use chess_core::{Game, Rules, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_scholars_mate_is_checkmate() {
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

    assert!(g.is_in_check());
    assert!(g.is_checkmate(), "Checkmate position should have no legal moves");
    assert!(!g.is_stalemate());
    assert!(!g.is_draw());
    assert!(g.is_game_over());
}

#[test]
fn test_check_is_not_checkmate() {
    let g = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(g.is_in_check(), "Black king should be in check");
    assert!(!g.is_checkmate(), "Check position should have legal moves");
    assert!(!g.is_game_over());
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(g.is_stalemate());
    assert!(!g.is_in_check(), "Stalemate means king is not in check");
    assert!(g.is_draw());
    assert!(g.is_game_over());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let g = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(g.is_stalemate());
    assert!(!g.is_checkmate());
}

#[test]
fn test_stalemate_reached_by_move() {
    let mut g = game("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1");
    assert!(!g.is_game_over());

    let applied = g.apply_move(sq("b5"), sq("b6"), None).unwrap();
    assert!(!applied.resulting_check);
    assert!(g.is_stalemate());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let g = game("8/8/8/4k3/8/4K3/8/7R w - - 100 60");

    assert!(g.is_fifty_move_draw());
    assert!(g.is_draw());
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let mut g = game("8/8/8/4k3/8/4K3/8/7R w - - 99 60");
    assert!(!g.is_fifty_move_draw());

    // One more quiet move reaches the limit
    g.apply_move(sq("h1"), sq("h2"), None).unwrap();
    assert!(g.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut g = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");

    g.apply_move(sq("e2"), sq("e3"), None).unwrap();

    assert!(!g.is_fifty_move_draw(), "Pawn move should reset halfmove clock");
    assert!(g.fen().ends_with(" 0 60"));
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_positions() {
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
        // c1 and f8 are both dark squares
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
    ] {
        let g = game(fen);
        assert!(g.is_insufficient_material(), "{fen}");
        assert!(g.is_draw(), "{fen}");
    }
}

#[test]
fn test_sufficient_material_positions() {
    for fen in [
        // c1 dark, c8 light
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        assert!(!game(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_capture_of_last_pawn_ends_game() {
    let mut g = game("7k/8/8/8/3pK3/8/8/8 w - - 0 1");
    assert!(!g.is_game_over());

    let applied = g.apply_move(sq("e4"), sq("d4"), None).unwrap();
    assert!(applied.is_capture);
    assert!(g.is_insufficient_material());
    assert!(g.is_game_over());
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    // 1.e4 e5 2.Nf3 Nc6, then 3.Ng1 Nb8 4.Nf3 Nc6 twice
    let mut g = Game::new_game();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        g.apply_move(sq(from), sq(to), None).unwrap();
    }

    for round in 0..2 {
        assert!(!g.is_threefold_repetition(), "round {round}");
        for (from, to) in [("f3", "g1"), ("c6", "b8"), ("g1", "f3"), ("b8", "c6")] {
            g.apply_move(sq(from), sq(to), None).unwrap();
        }
    }

    assert!(g.is_threefold_repetition());
    assert!(g.is_draw());
    assert_eq!(g.history_notation().len(), 12);
}

#[test]
fn test_repetition_requires_same_castling_rights() {
    // Rook shuffles lose castling rights, so the first position never recurs
    let mut g = game("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    for _ in 0..3 {
        for (from, to) in [("a1", "a2"), ("e8", "d8"), ("a2", "a1"), ("d8", "e8")] {
            g.apply_move(sq(from), sq(to), None).unwrap();
        }
    }
    // The post-shuffle position did recur three times
    assert!(g.is_threefold_repetition());

    let mut fresh = game("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    for (from, to) in [("a1", "a2"), ("e8", "d8"), ("a2", "a1"), ("d8", "e8")] {
        fresh.apply_move(sq(from), sq(to), None).unwrap();
    }
    // Same placement as the start, but without the Q right
    assert_eq!(fresh.fen(), "4k3/8/8/8/8/8/8/R3K3 w - - 4 3");
    assert!(!fresh.is_threefold_repetition());
}
