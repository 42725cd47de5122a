pub mod board;
pub mod game;
pub mod movegen;
pub mod san;
pub mod types;
pub mod zobrist;

// Re-export core game logic
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use san::to_san;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Rules trait — the oracle an interactive session consults for legality
// =============================================================================

/// Everything an interactive session needs to know about chess.
///
/// `Game` is the implementation shipped with this crate. The session layer is
/// generic over this trait so it never depends on how legality is decided.
pub trait Rules: Sized {
    /// The standard starting position.
    fn new_game() -> Self;

    /// A game starting from an arbitrary position.
    fn from_fen(fen: &str) -> Result<Self, FenError>;

    fn piece_at(&self, sq: Square) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    /// Destinations reachable by the piece on `sq`, check-safety included.
    ///
    /// Empty when the square is empty, holds a piece of the side not to move,
    /// or the piece has no legal move.
    fn legal_moves_from(&self, sq: Square) -> Vec<Square>;

    /// Play a move, or leave the game untouched and say why not.
    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<AppliedMove, IllegalMove>;

    fn is_in_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    fn is_fifty_move_draw(&self) -> bool;

    fn is_draw(&self) -> bool {
        self.is_fifty_move_draw()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    fn board_snapshot(&self) -> BoardGrid;

    /// SAN of every move played, one entry per half-move.
    fn history_notation(&self) -> &[String];

    fn fen(&self) -> String;
}
