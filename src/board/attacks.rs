use super::{Bitboard, Board, Color, Piece, Square, KING_ATTACKS, KNIGHT_ATTACKS};

impl Board {
    /// Whether `sq` is attacked by the side opposing `defender`.
    ///
    /// Checks sliders first (most common attackers in tactical positions),
    /// then knights, king and pawns, short-circuiting on the first hit.
    pub(crate) fn is_square_attacked(&self, sq: Square, defender: Color) -> bool {
        let attacker = defender.opponent();
        let b = Bitboard::from_square(sq);
        let empty = self.empty_squares();

        let queens = self.pieces_of(attacker, Piece::Queen);
        if !(b.bishop_attacks(empty) & (self.pieces_of(attacker, Piece::Bishop) | queens))
            .is_empty()
        {
            return true;
        }
        if !(b.rook_attacks(empty) & (self.pieces_of(attacker, Piece::Rook) | queens)).is_empty() {
            return true;
        }
        if !(KNIGHT_ATTACKS[sq.index()] & self.pieces_of(attacker, Piece::Knight)).is_empty() {
            return true;
        }
        if !(KING_ATTACKS[sq.index()] & self.pieces_of(attacker, Piece::King)).is_empty() {
            return true;
        }
        // A defender's pawn standing on sq would attack exactly the squares
        // from which an enemy pawn attacks sq.
        if !(b.pawn_attacks(defender) & self.pieces_of(attacker, Piece::Pawn)).is_empty() {
            return true;
        }

        false
    }

    /// Whether the given color's king is attacked by the opposite side.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color)
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }
}
