use super::*;
use chess_core::Game;
use chess_session::{project, Event, GameSession};

fn click(session: &mut GameSession, name: &str) {
    let square: Square = name.parse().unwrap();
    session.handle(Event::SquareClicked { square }).unwrap();
}

fn line(board: &str, rank: usize) -> &str {
    board.lines().nth(8 - rank).unwrap()
}

#[test]
fn test_start_position() {
    let board = render_board(&project(&GameSession::<Game>::new()));

    assert_eq!(board.lines().count(), 9);
    assert_eq!(line(&board, 8), "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
    assert_eq!(line(&board, 4), "4  ·  ·  ·  ·  ·  ·  ·  · ");
    assert_eq!(line(&board, 1), "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ ");
    assert_eq!(board.lines().last(), Some("   a  b  c  d  e  f  g  h"));
}

#[test]
fn test_markers() {
    let mut session = GameSession::<Game>::new();
    click(&mut session, "e2");
    click(&mut session, "e4");
    click(&mut session, "g8");
    let board = render_board(&project(&session));

    assert_eq!(line(&board, 8), "8  ♜  ♞  ♝  ♛  ♚  ♝ [♞] ♜ ");
    let empty = " · ";
    let destination = "*· ";
    assert_eq!(
        line(&board, 6),
        format!("6 {}{destination}{empty}{destination}", empty.repeat(5))
    );
    assert_eq!(line(&board, 4), "4  ·  ·  ·  ·  ♙' ·  ·  · ");
    assert_eq!(line(&board, 2), "2  ♙  ♙  ♙  ♙  ·' ♙  ♙  ♙ ");
}

#[test]
fn test_status_lines() {
    let mut session = GameSession::<Game>::new();
    for name in ["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"] {
        click(&mut session, name);
    }
    let text = render_view(&project(&session));

    assert!(text.contains("White to move\n"));
    assert!(text.contains("Checkmate!\n"));
    assert!(text.contains("Game over."));
    assert!(text.contains("Half-moves: 4\n"));
    assert!(text.contains("Moves: f3 e5 g4 Qh4#\n"));
    assert!(!text.contains("promotes"));
}

#[test]
fn test_quiet_start_has_no_status_or_moves() {
    let text = render_view(&project(&GameSession::<Game>::new()));
    assert!(text.contains("White to move\nHalf-moves: 0\n"));
    assert!(!text.contains("Moves:"));
}

#[test]
fn test_promotion_prompt() {
    let mut session = GameSession::<Game>::with_start_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1").unwrap();
    click(&mut session, "a2");
    click(&mut session, "a1");
    let text = render_view(&project(&session));

    assert!(text.contains("Black pawn promotes: choose with `promote q|r|b|n`"));
}

#[test]
fn test_view_appends_exact_summary_below_board() {
    let mut session = GameSession::<Game>::new();
    for name in ["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"] {
        click(&mut session, name);
    }
    let view = project(&session);
    let text = render_view(&view);

    let summary = text.strip_prefix(&render_board(&view)).unwrap();
    assert_eq!(
        summary,
        "\nWhite to move\nCheckmate!\nGame over. Type `reset` to start again.\nHalf-moves: 4\nMoves: f3 e5 g4 Qh4#\n"
    );
}
