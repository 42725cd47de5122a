use thiserror::Error;

use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Reasons a FEN string cannot be turned into a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in FEN board, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),
    #[error("FEN rank {rank} does not describe exactly 8 files")]
    FileCount { rank: u8 },
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(Square, Square)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<Square>,      // square actually captured in en-passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let rank_err = || FenError::FileCount {
                rank: rank as u8 + 1,
            };
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(rank_err());
                    }
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::from_coords(file, rank).ok_or_else(rank_err)?;
                    board[sq.index()] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(rank_err());
                }
            }
            if file != 8 {
                return Err(rank_err());
            }
        }

        for color in [Color::White, Color::Black] {
            let count = board
                .iter()
                .flatten()
                .filter(|pc| pc.color == color && pc.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::InvalidSide(stm_part.to_string())),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(castle_part.to_string())),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            let sq: Square = ep_part
                .parse()
                .map_err(|_| FenError::InvalidEnPassant(ep_part.to_string()))?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(FenError::InvalidEnPassant(ep_part.to_string()));
            }
            Some(sq)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| FenError::InvalidCounter(halfmove_part.to_string()))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| FenError::InvalidCounter(fullmove_part.to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match Square::from_coords(file, rank).and_then(|s| self.piece_at(s)) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ];
        if rights.iter().any(|(on, _)| *on) {
            fen.extend(rights.iter().filter(|(on, _)| *on).map(|(_, c)| *c));
        } else {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(ep) => fen.push_str(&ep.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        Square::all().find(|&s| {
            self.piece_at(s)
                .is_some_and(|pc| pc.color == c && pc.kind == PieceKind::King)
        })
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.index()] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    fn holds(&self, sq: Option<Square>, by: Color, kind: PieceKind) -> bool {
        sq.and_then(|s| self.piece_at(s))
            .is_some_and(|pc| pc.color == by && pc.kind == kind)
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawn attacks come from the rank behind the target, seen from the attacker
        let pawn_dr: i8 = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if self.holds(target.offset(df, pawn_dr), by, PieceKind::Pawn) {
                return true;
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if self.holds(target.offset(df, dr), by, PieceKind::Knight) {
                return true;
            }
        }

        for (df, dr) in KING_DELTAS {
            if self.holds(target.offset(df, dr), by, PieceKind::King) {
                return true;
            }
        }

        // Sliding: bishop/rook/queen
        self.slider_hits(target, by, &DIAGONALS, PieceKind::Bishop)
            || self.slider_hits(target, by, &ORTHOGONALS, PieceKind::Rook)
    }

    fn slider_hits(&self, target: Square, by: Color, dirs: &[(i8, i8)], kind: PieceKind) -> bool {
        for &(df, dr) in dirs {
            let mut cur = target.offset(df, dr);
            while let Some(s) = cur {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cur = s.offset(df, dr);
            }
        }
        false
    }

    /// Fifty full moves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or only bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = Vec::new();
        for s in Square::all() {
            let Some(pc) = self.piece_at(s) else { continue };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((pc.kind, s)),
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        match minors.len() {
            0 | 1 => true,
            _ => {
                let all_bishops = minors.iter().all(|(k, _)| *k == PieceKind::Bishop);
                let first_light = minors[0].1.is_light();
                all_bishops && minors.iter().all(|(_, s)| s.is_light() == first_light)
            }
        }
    }

    /// The en-passant square only matters when a pawn can actually take on it.
    fn ep_capturable(&self) -> bool {
        let Some(ep) = self.en_passant else {
            return false;
        };
        let mover = self.side_to_move;
        let behind: i8 = match mover {
            Color::White => -1,
            Color::Black => 1,
        };
        [-1, 1]
            .iter()
            .any(|&df| self.holds(ep.offset(df, behind), mover, PieceKind::Pawn))
    }

    /// Zobrist key of everything that makes two positions "the same" for
    /// repetition purposes (move counters excluded).
    pub fn zobrist_hash(&self) -> u64 {
        let mut h = 0u64;
        for s in Square::all() {
            if let Some(pc) = self.piece_at(s) {
                h ^= ZOBRIST.piece(pc, s);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.black_to_move();
        }
        let rights = [
            self.castling.wk,
            self.castling.wq,
            self.castling.bk,
            self.castling.bq,
        ];
        for (i, on) in rights.into_iter().enumerate() {
            if on {
                h ^= ZOBRIST.castling(i);
            }
        }
        if let Some(ep) = self.en_passant
            && self.ep_capturable()
        {
            h ^= ZOBRIST.en_passant(ep.file() as u8);
        }
        h
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        // Halfmove clock reset on capture or pawn move
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        // Handle en-passant capture
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = to.offset(0, dir) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        // Move piece (promotion handled after)
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn && to.rank() == moved.color.promotion_rank() {
            let promo = mv.promo.unwrap_or(PieceKind::Queen);
            self.set_piece(to, Some(Piece::new(moved.color, promo)));
        }

        // Castling rook move
        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match (moved.color, from, to) {
                (Color::White, Square::E1, Square::G1) => Some((Square::H1, Square::F1)),
                (Color::White, Square::E1, Square::C1) => Some((Square::A1, Square::D1)),
                (Color::Black, Square::E8, Square::G8) => Some((Square::H8, Square::F8)),
                (Color::Black, Square::E8, Square::C8) => Some((Square::A8, Square::D8)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
                rook_move = Some((rf, rt));
            }
        }

        // Update castling rights if king/rook moved or rook captured
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == Square::A1 {
                        self.castling.wq = false;
                    }
                    if from == Square::H1 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == Square::A8 {
                        self.castling.bq = false;
                    }
                    if from == Square::H8 {
                        self.castling.bk = false;
                    }
                }
            }
        }
        // If rook captured on its home square, remove right
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            match cp.color {
                Color::White => {
                    if to == Square::A1 {
                        self.castling.wq = false;
                    }
                    if to == Square::H1 {
                        self.castling.wk = false;
                    }
                }
                Color::Black => {
                    if to == Square::A8 {
                        self.castling.bq = false;
                    }
                    if to == Square::H8 {
                        self.castling.bk = false;
                    }
                }
            }
        }

        // Double pawn push sets en-passant square (the square passed over)
        if moved.kind == PieceKind::Pawn && (to.rank() - from.rank()).abs() == 2 {
            self.en_passant = Square::from_coords(from.file(), (from.rank() + to.rank()) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        // Switch side
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        // Restore side
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let from = mv.from;
        let to = mv.to;

        // Undo castling rook move
        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts a promotion
        self.set_piece(to, None);
        self.set_piece(from, Some(undo.moved_piece));

        // Restore captured piece
        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(to, undo.captured);
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
