//! Chess position representation and move generation.
//!
//! Bitboard-based: a mailbox mirrors per-piece bitboards and per-color
//! occupancy, moves are made and unmade against a fixed-size undo stack with
//! incrementally maintained material and Zobrist hash.
//!
//! # Example
//! ```
//! use halcyon::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod debug;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError};
pub use state::{Board, Undo, MAX_PLYS};
pub use types::{Bitboard, BitboardIter, Color, Direction, Move, MoveList, Piece, Square};

pub(crate) use types::{
    file_to_index, kingside_bit, queenside_bit, rank_to_index, ALL_CASTLING, BLACK_KINGSIDE,
    BLACK_QUEENSIDE, KING_ATTACKS, KNIGHT_ATTACKS, NO_CASTLING, WHITE_KINGSIDE, WHITE_QUEENSIDE,
};

/// Pawn advance direction as a square-index delta.
#[inline]
pub(crate) const fn pawn_up(color: Color) -> i32 {
    match color {
        Color::White => 8,
        Color::Black => -8,
    }
}
