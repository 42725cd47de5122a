//! Repetition keys.
//!
//! A game keeps one key per position reached, so threefold repetition is a
//! count over a list of `u64`s rather than a comparison of boards. Keys live
//! in one flat table:
//!
//! | range       | feature                            |
//! |-------------|------------------------------------|
//! | `0..768`    | piece of (color, kind) on a square |
//! | `768`       | black to move                      |
//! | `769..773`  | castling right (wk, wq, bk, bq)    |
//! | `773..781`  | en passant file                    |

use crate::types::{Piece, Square};

const PIECES: usize = 0;
const BLACK_TO_MOVE: usize = PIECES + 2 * 6 * 64;
const CASTLING: usize = BLACK_TO_MOVE + 1;
const EN_PASSANT: usize = CASTLING + 4;
const KEY_COUNT: usize = EN_PASSANT + 8;

pub struct ZobristKeys {
    keys: [u64; KEY_COUNT],
}

impl ZobristKeys {
    /// Fill the table from a splitmix64 stream started at `seed`.
    pub const fn from_seed(seed: u64) -> Self {
        let mut keys = [0u64; KEY_COUNT];
        let mut state = seed;
        let mut i = 0;
        while i < KEY_COUNT {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            keys[i] = z ^ (z >> 31);
            i += 1;
        }
        Self { keys }
    }

    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        let slot = piece.color.idx() * 6 + piece.kind.idx();
        self.keys[PIECES + slot * 64 + sq.index()]
    }

    pub fn black_to_move(&self) -> u64 {
        self.keys[BLACK_TO_MOVE]
    }

    /// `right` is 0..4 in the order wk, wq, bk, bq.
    pub fn castling(&self, right: usize) -> u64 {
        self.keys[CASTLING + right]
    }

    pub fn en_passant(&self, file: u8) -> u64 {
        self.keys[EN_PASSANT + file as usize]
    }

    /// Every key in the table, in layout order.
    pub fn all(&self) -> &[u64] {
        &self.keys
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::from_seed(0x00C4_E55F_A77E_2200);

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
