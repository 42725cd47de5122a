//! End-to-end games fed to a host as JSON events, the way a surface would.

use chess_core::{Color, Piece, PieceKind, Rules};
use chess_session::{Cue, Event, GameSession, GameStatus, Recorder, SessionHost, ViewState};

fn host() -> SessionHost<chess_core::Game, Recorder> {
    SessionHost::new(GameSession::new(), Recorder::new())
}

fn send(host: &mut SessionHost<chess_core::Game, Recorder>, json: &str) -> Option<ViewState> {
    let event: Event = serde_json::from_str(json).unwrap();
    host.dispatch(event).unwrap()
}

fn click(square: &str) -> String {
    format!(r#"{{"type": "square_clicked", "square": "{square}"}}"#)
}

#[test]
fn pawn_push_from_the_start() {
    let mut host = host();

    let view = send(&mut host, &click("e2")).unwrap();
    let dests: Vec<String> = view.legal_destinations.iter().map(|s| s.to_string()).collect();
    assert!(dests.contains(&"e3".to_string()));
    assert!(dests.contains(&"e4".to_string()));

    let view = send(&mut host, &click("e4")).unwrap();
    assert_eq!(view.half_move_count, 1);
    let last = view.last_move.unwrap();
    assert_eq!((last.from.to_string(), last.to.to_string()), ("e2".into(), "e4".into()));
    assert_eq!(view.status, GameStatus::None);
    assert_eq!(view.status.to_string(), "");
    assert_eq!(
        host.session().rules().piece_at("e4".parse().unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn underpromotion_by_drag_and_drop() {
    let session = GameSession::with_start_fen("8/4P3/8/8/8/k7/8/4K3 w - - 0 1").unwrap();
    let mut host = SessionHost::new(session, Recorder::new());

    send(&mut host, r#"{"type": "drag_started", "square": "e7"}"#).unwrap();
    let view = send(&mut host, r#"{"type": "dropped", "from": "e7", "to": "e8"}"#).unwrap();
    assert_eq!(view.awaiting_promotion, Some(Color::White));
    assert_eq!(view.board[1][4], Some(Piece::new(Color::White, PieceKind::Pawn)));

    let view = send(&mut host, r#"{"type": "promotion_chosen", "piece": "r"}"#).unwrap();
    assert_eq!(view.awaiting_promotion, None);
    assert_eq!(view.board[0][4], Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(view.notation, "e8=R");
    assert_eq!(host.feedback().played(), [Cue::Move]);
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut host = host();
    for square in ["e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6"] {
        send(&mut host, &click(square));
    }
    let view = send(&mut host, &click("h5")).unwrap();
    assert_eq!(view.selected_square.map(|s| s.to_string()), Some("h5".to_string()));

    let view = send(&mut host, &click("f7")).unwrap();
    assert_eq!(view.status.to_string(), "Checkmate!");
    assert!(view.is_game_over);
    assert_eq!(view.notation, "e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7#");
    assert_eq!(host.feedback().played().last(), Some(&Cue::GameOver));

    let played = host.feedback().played();
    assert_eq!(played.len(), 7);
    assert!(played[..6].iter().all(|&c| c == Cue::Move));

    // Once the game is over every piece is stuck
    let view = send(&mut host, &click("e8")).unwrap();
    assert!(view.legal_destinations.is_empty());

    let view = send(&mut host, r#"{"type": "reset"}"#).unwrap();
    assert!(!view.is_game_over);
    assert_eq!(view.half_move_count, 0);
}
