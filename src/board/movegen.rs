use super::{
    kingside_bit, pawn_up, queenside_bit, Bitboard, Board, Color, Direction, Move, MoveList, Piece,
    KING_ATTACKS, KNIGHT_ATTACKS,
};

impl Board {
    /// All legal moves in the current position.
    ///
    /// Generation order is fixed: captures first (pawns, knights, diagonal
    /// sliders, orthogonal sliders, king), then quiet moves in the same
    /// piece order, then castling. Pseudo-legal moves are filtered through a
    /// make/unmake legality test.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        self.generate_legal(false)
    }

    /// Legal captures only (including en passant). A subset of
    /// `generate_moves`, in the same relative order.
    #[must_use]
    pub fn generate_captures(&mut self) -> MoveList {
        self.generate_legal(true)
    }

    fn generate_legal(&mut self, only_captures: bool) -> MoveList {
        let pseudo = self.generate_pseudo(only_captures);
        let mut legal = MoveList::new();
        for &mv in &pseudo {
            if self.is_legal(mv) {
                legal.push(mv);
            }
        }
        legal
    }

    fn generate_pseudo(&self, only_captures: bool) -> MoveList {
        let us = self.side_to_move;
        let diagonal = self.pieces_of(us, Piece::Bishop) | self.pieces_of(us, Piece::Queen);
        let orthogonal = self.pieces_of(us, Piece::Rook) | self.pieces_of(us, Piece::Queen);
        let mut moves = MoveList::new();

        let target = self.occupied[us.opponent().index()];
        self.pawn_captures(us, &mut moves);
        self.knight_moves(us, target, &mut moves);
        self.slider_moves(diagonal, target, SliderKind::Bishop, &mut moves);
        self.slider_moves(orthogonal, target, SliderKind::Rook, &mut moves);
        self.king_moves(us, target, &mut moves);

        if !only_captures {
            let target = self.empty_squares();
            self.pawn_pushes(us, target, &mut moves);
            self.knight_moves(us, target, &mut moves);
            self.slider_moves(diagonal, target, SliderKind::Bishop, &mut moves);
            self.slider_moves(orthogonal, target, SliderKind::Rook, &mut moves);
            self.king_moves(us, target, &mut moves);
            self.castling_moves(us, &mut moves);
        }

        moves
    }

    /// Single and double pawn advances, with promotions expanded.
    fn pawn_pushes(&self, us: Color, target: Bitboard, moves: &mut MoveList) {
        let pawns = self.pieces_of(us, Piece::Pawn);
        let empty = self.empty_squares();
        let up = pawn_up(us);
        let (up_dir, home_rank, promo_rank) = match us {
            Color::White => (Direction::North, Bitboard::RANK_2, Bitboard::RANK_8),
            Color::Black => (Direction::South, Bitboard::RANK_7, Bitboard::RANK_1),
        };

        let mut dest = pawns.shift(up_dir) & empty & target;
        let mut promo = dest & promo_rank;
        dest ^= promo;

        while !promo.is_empty() {
            let to = promo.pop();
            let from = to.offset(-up);
            moves.push(Move::promotion(from, to, Piece::Queen));
            moves.push(Move::promotion(from, to, Piece::Rook));
            moves.push(Move::promotion(from, to, Piece::Bishop));
            moves.push(Move::promotion(from, to, Piece::Knight));
        }
        while !dest.is_empty() {
            let to = dest.pop();
            moves.push(Move::new(to.offset(-up), to));
        }

        let mut dest = (pawns & home_rank).shift(up_dir) & empty;
        dest = dest.shift(up_dir) & empty & target;
        while !dest.is_empty() {
            let to = dest.pop();
            moves.push(Move::double_push(to.offset(-2 * up), to));
        }
    }

    /// Pawn captures east and west, with en passant tested against the
    /// shifted pawn set before intersecting with enemy occupancy, and
    /// capture-promotions expanded.
    fn pawn_captures(&self, us: Color, moves: &mut MoveList) {
        let pawns = self.pieces_of(us, Piece::Pawn);
        let enemy = self.occupied[us.opponent().index()];
        let up = pawn_up(us);
        let (east_dir, west_dir, promo_rank) = match us {
            Color::White => (
                Direction::NorthEast,
                Direction::NorthWest,
                Bitboard::RANK_8,
            ),
            Color::Black => (
                Direction::SouthEast,
                Direction::SouthWest,
                Bitboard::RANK_1,
            ),
        };

        for (dir, delta) in [(east_dir, up + 1), (west_dir, up - 1)] {
            let mut dest = pawns.shift(dir);

            if let Some(ep) = self.en_passant_target() {
                if dest.contains(ep) {
                    moves.push(Move::en_passant(ep.offset(-delta), ep));
                }
            }

            dest &= enemy;
            let mut promo = dest & promo_rank;
            dest ^= promo;

            while !promo.is_empty() {
                let to = promo.pop();
                let from = to.offset(-delta);
                moves.push(Move::promotion(from, to, Piece::Queen));
                moves.push(Move::promotion(from, to, Piece::Rook));
                moves.push(Move::promotion(from, to, Piece::Bishop));
                moves.push(Move::promotion(from, to, Piece::Knight));
            }
            while !dest.is_empty() {
                let to = dest.pop();
                moves.push(Move::new(to.offset(-delta), to));
            }
        }
    }

    fn knight_moves(&self, us: Color, target: Bitboard, moves: &mut MoveList) {
        for from in self.pieces_of(us, Piece::Knight).iter() {
            let mut attacks = KNIGHT_ATTACKS[from.index()] & target;
            while !attacks.is_empty() {
                moves.push(Move::new(from, attacks.pop()));
            }
        }
    }

    fn slider_moves(
        &self,
        sliders: Bitboard,
        target: Bitboard,
        kind: SliderKind,
        moves: &mut MoveList,
    ) {
        let empty = self.empty_squares();
        for from in sliders.iter() {
            let rays = match kind {
                SliderKind::Bishop => Bitboard::from_square(from).bishop_attacks(empty),
                SliderKind::Rook => Bitboard::from_square(from).rook_attacks(empty),
            };
            let mut attacks = rays & target;
            while !attacks.is_empty() {
                moves.push(Move::new(from, attacks.pop()));
            }
        }
    }

    fn king_moves(&self, us: Color, target: Bitboard, moves: &mut MoveList) {
        for from in self.pieces_of(us, Piece::King).iter() {
            let mut attacks = KING_ATTACKS[from.index()] & target;
            while !attacks.is_empty() {
                moves.push(Move::new(from, attacks.pop()));
            }
        }
    }

    /// Castling, emitted only when generating quiets. Requires the right,
    /// empty squares between king and rook, and that neither the king's
    /// square nor the two squares it crosses are attacked.
    fn castling_moves(&self, us: Color, moves: &mut MoveList) {
        let king = self.king_square(us);
        if self.is_square_attacked(king, us) {
            return;
        }
        let rights = self.castling_rights();

        if rights & kingside_bit(us) != 0 {
            let one = king.offset(1);
            let two = king.offset(2);
            if self.piece_at(one).is_none()
                && self.piece_at(two).is_none()
                && !self.is_square_attacked(one, us)
                && !self.is_square_attacked(two, us)
            {
                moves.push(Move::kingside_castle(king, two));
            }
        }

        if rights & queenside_bit(us) != 0 {
            let one = king.offset(-1);
            let two = king.offset(-2);
            let three = king.offset(-3);
            if self.piece_at(one).is_none()
                && self.piece_at(two).is_none()
                && self.piece_at(three).is_none()
                && !self.is_square_attacked(one, us)
                && !self.is_square_attacked(two, us)
            {
                moves.push(Move::queenside_castle(king, two));
            }
        }
    }

    /// A pseudo-legal move is legal if it does not leave the mover's own
    /// king attacked. Tested by playing the move and looking.
    fn is_legal(&mut self, mv: Move) -> bool {
        self.make_move(mv);
        let mover = self.side_to_move.opponent();
        let legal = !self.is_square_attacked(self.king_square(mover), mover);
        self.unmake_move(mv);
        legal
    }

    /// Exhaustive leaf count to the given depth; the standard move-generator
    /// correctness oracle.
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv);
        }
        nodes
    }
}

#[derive(Clone, Copy)]
enum SliderKind {
    Bishop,
    Rook,
}
