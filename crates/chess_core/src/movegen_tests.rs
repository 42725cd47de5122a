use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_promotions_generated_per_piece() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.from == sq("a7"))
        .collect();
    assert_eq!(promos.len(), 4);
    assert!(promos.iter().all(|m| m.to == sq("a8") && m.promo.is_some()));
}

#[test]
fn test_en_passant_generated() {
    let pos = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
    let ep = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_en_passant)
        .expect("en passant capture available");
    assert_eq!((ep.from, ep.to), (sq("d5"), sq("e6")));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 is pinned against the king by the rook on e8
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| m.from != sq("e2")));
}

#[test]
fn test_no_castling_through_attack() {
    // Black bishop on c4 covers f1
    let pos = Position::from_fen("4k3/8/8/8/2b5/8/8/4K2R w K - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));
}
