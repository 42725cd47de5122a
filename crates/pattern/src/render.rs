//! Plain-text board drawing.

use chess_core::{Color, Piece, PieceKind, Square};
use chess_session::{GameStatus, ViewState};

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// The board alone, rank 8 at the top.
///
/// Each square is three characters: `[` `]` around the selected square, a
/// leading `*` on legal destinations and a trailing `'` on the squares of
/// the last move.
pub fn render_board(view: &ViewState) -> String {
    let last_move = |sq: Square| view.last_move.is_some_and(|m| m.from == sq || m.to == sq);

    let mut out = String::new();
    for (row, cells) in view.board.iter().enumerate() {
        let rank = 7 - row;
        out.push_str(&format!("{} ", rank + 1));
        for (file, cell) in cells.iter().enumerate() {
            let Some(sq) = Square::from_coords(file as i8, rank as i8) else {
                continue;
            };
            let selected = view.selected_square == Some(sq);
            let left = if selected {
                '['
            } else if view.legal_destinations.contains(&sq) {
                '*'
            } else {
                ' '
            };
            let right = if selected {
                ']'
            } else if last_move(sq) {
                '\''
            } else {
                ' '
            };
            out.push(left);
            out.push(cell.map_or('·', glyph));
            out.push(right);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

/// Board plus the lines describing the game state.
pub fn render_view(view: &ViewState) -> String {
    let mut out = render_board(view);

    out.push('\n');
    out.push_str(&format!("{} to move\n", side_name(view.side_to_move)));
    if view.status != GameStatus::None {
        out.push_str(&format!("{}\n", view.status));
    }
    if view.is_game_over {
        out.push_str("Game over. Type `reset` to start again.\n");
    }
    out.push_str(&format!("Half-moves: {}\n", view.half_move_count));
    if !view.notation.is_empty() {
        out.push_str(&format!("Moves: {}\n", view.notation));
    }
    if let Some(color) = view.awaiting_promotion {
        out.push_str(&format!(
            "{} pawn promotes: choose with `promote q|r|b|n`\n",
            side_name(color)
        ));
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
