//! Zobrist hashing keys.
//!
//! Provides incrementally-updatable 64-bit position hashes. The table is
//! filled from a xorshift-64 generator seeded to 1, so every process builds
//! the same keys and hash values can be pinned in tests.

use once_cell::sync::Lazy;

use crate::board::{Color, Piece, Square};
use crate::prng::XorShift64;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    /// Indexed by the whole 4-bit castling-rights mask, not per right:
    /// updates XOR out the old mask's key and XOR in the new mask's key.
    pub(crate) castling_keys: [u64; 16],
    pub(crate) ep_file_keys: [u64; 8],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = XorShift64::new(1);

        let black_to_move_key = rng.next_u64();

        let mut piece_keys = [[[0u64; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }

        let mut castling_keys = [0u64; 16];
        for key in &mut castling_keys {
            *key = rng.next_u64();
        }

        let mut ep_file_keys = [0u64; 8];
        for key in &mut ep_file_keys {
            *key = rng.next_u64();
        }

        ZobristKeys {
            piece_keys,
            castling_keys,
            ep_file_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
