use super::*;
use chess_core::{Game, Square};
use chess_session::{project, Event, GameSession};

fn view_after(moves: &[&str]) -> ViewState {
    let mut session = GameSession::<Game>::new();
    for mv in moves {
        let (from, to) = mv.split_at(2);
        for name in [from, to] {
            let square: Square = name.parse().unwrap();
            session.handle(Event::SquareClicked { square }).unwrap();
        }
    }
    project(&session)
}

const SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

#[test]
fn test_empty_pattern_is_rejected() {
    let policy = PatternPolicy { min_half_moves: 0 };
    assert_eq!(policy.accept(&view_after(&[])), Err(PatternError::Empty));
}

#[test]
fn test_default_needs_more_than_twenty() {
    let policy = PatternPolicy::default();
    assert_eq!(policy.min_half_moves, 21);

    let moves: Vec<&str> = SHUFFLE.iter().cycle().take(20).copied().collect();
    assert_eq!(
        policy.accept(&view_after(&moves)),
        Err(PatternError::TooShort { have: 20, need: 21 })
    );

    let moves: Vec<&str> = SHUFFLE.iter().cycle().take(21).copied().collect();
    let view = view_after(&moves);
    let accepted = policy.accept(&view).unwrap();
    assert_eq!(accepted.split(' ').count(), 21);
    assert!(accepted.starts_with("Nf3 Nf6 Ng1 Ng8 Nf3"));
}

#[test]
fn test_configured_minimum() {
    let policy = PatternPolicy::from(&PatternConfig { min_half_moves: 2 });
    assert!(policy.accept(&view_after(&["e2e4"])).is_err());
    assert_eq!(policy.accept(&view_after(&["e2e4", "e7e5"])), Ok("e4 e5"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PatternError::TooShort { have: 3, need: 21 }.to_string(),
        "pattern must be at least 21 half-moves long, found 3"
    );
}
