use crate::board::{DIAGONALS, ORTHOGONALS, Position};
use crate::types::*;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in Square::all() {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_JUMPS),
            PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, from, pc.color, out, &DIAGONALS);
                gen_slider(pos, from, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, out, &KING_STEPS);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, c: Color, out: &mut Vec<Move>) {
    if to.rank() == c.promotion_rank() {
        for pk in PieceKind::PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    // forward 1
    if let Some(to) = from.offset(0, dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);

        // forward 2 from start
        if from.rank() == start_rank
            && let Some(to2) = from.offset(0, 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => push_pawn_move(from, to, c, out),
            Some(_) => {}
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            None => {}
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(df, dr);
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    // (king home, king side allowed, queen side allowed, f, g, d, c, b)
    let (home, king_side, queen_side, f, g, d, cc, b) = match c {
        Color::White => (
            Square::E1,
            pos.castling.wk,
            pos.castling.wq,
            Square::F1,
            Square::G1,
            Square::D1,
            Square::C1,
            Square::B1,
        ),
        Color::Black => (
            Square::E8,
            pos.castling.bk,
            pos.castling.bq,
            Square::F8,
            Square::G8,
            Square::D8,
            Square::C8,
            Square::B8,
        ),
    };
    if from != home {
        return;
    }

    // Can't castle out of/through check: check squares must not be attacked.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let empty = |s: Square| pos.piece_at(s).is_none();
    let safe = |s: Square| !pos.is_square_attacked(s, enemy);

    if king_side && empty(f) && empty(g) && safe(f) && safe(g) {
        let mut mv = Move::new(home, g);
        mv.is_castle = true;
        out.push(mv);
    }
    if queen_side && empty(d) && empty(cc) && empty(b) && safe(d) && safe(cc) {
        let mut mv = Move::new(home, cc);
        mv.is_castle = true;
        out.push(mv);
    }
}

/// Count the leaf positions `depth` plies below `pos`.
///
/// The last ply is bulk-counted from the legal move list instead of being
/// played out.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut buffers = vec![Vec::with_capacity(64); depth as usize];
    perft_inner(pos, &mut buffers)
}

fn perft_inner(pos: &mut Position, buffers: &mut [Vec<Move>]) -> u64 {
    let Some((moves, deeper)) = buffers.split_first_mut() else {
        return 1;
    };
    legal_moves_into(pos, moves);
    if deeper.is_empty() {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves.iter().copied() {
        let undo = pos.make_move(mv);
        nodes += perft_inner(pos, deeper);
        pos.unmake_move(mv, undo);
    }
    nodes
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
