use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::moves::Square;
use crate::piece::{Color, PieceKind};

lazy_static! {
    pub(crate) static ref ZOBRIST: ZobristTable = ZobristTable::new();
}

/// Random keys for the structural position hash. The seed is fixed so keys
/// (and therefore repetition counts) are identical across runs.
pub(crate) struct ZobristTable {
    // piece_keys[color][kind][row * 8 + col]
    piece_keys: [[[u64; 64]; 6]; 2],
    en_passant_keys: [u64; 64],
    black_to_move_key: u64,
}

impl ZobristTable {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED_C0FF_EE15_B0A4);
        let mut table = ZobristTable {
            piece_keys: [[[0; 64]; 6]; 2],
            en_passant_keys: [0; 64],
            black_to_move_key: rng.next_u64(),
        };
        for color in 0..2 {
            for kind in 0..6 {
                for sq in 0..64 {
                    table.piece_keys[color][kind][sq] = rng.next_u64();
                }
            }
        }
        for key in table.en_passant_keys.iter_mut() {
            *key = rng.next_u64();
        }
        table
    }

    #[inline]
    pub fn piece(&self, color: Color, kind: PieceKind, sq: Square) -> u64 {
        self.piece_keys[color.index()][kind.index()][sq.0 * 8 + sq.1]
    }

    /// Zero when there is no target.
    #[inline]
    pub fn en_passant(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |(r, c)| self.en_passant_keys[r * 8 + c])
    }

    /// Zero for White.
    #[inline]
    pub fn side_to_move(&self, color: Color) -> u64 {
        if color == Color::Black {
            self.black_to_move_key
        } else {
            0
        }
    }
}
