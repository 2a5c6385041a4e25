//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng as _;

use crate::board::{Board, Move};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, recording them.
fn random_playout(board: &mut Board, seed: u64, num_moves: usize) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        board.make_move(mv);
        history.push(mv);
    }
    history
}

proptest! {
    /// make_move followed by unmake_move restores the position exactly.
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial_hash = board.hash();
        let initial_fen = board.to_fen();

        let mut history = random_playout(&mut board, seed, num_moves);
        while let Some(mv) = history.pop() {
            board.unmake_move(mv);
        }

        prop_assert_eq!(board.hash(), initial_hash);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }

    /// The incremental hash always equals the hash recomputed from scratch.
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            board.make_move(mv);
            prop_assert_eq!(board.hash(), board.calculate_hash());
        }
    }

    /// FEN round-trips through parse and emit.
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).unwrap();
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.hash(), board.hash());
    }

    /// No generated move leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let moves = board.generate_moves();
        for &mv in &moves {
            board.make_move(mv);
            let mover = board.side_to_move().opponent();
            prop_assert!(!board.is_in_check(mover));
            board.unmake_move(mv);
        }
    }

    /// The capture list is a subset of the full move list, and the
    /// complement contains no captures.
    #[test]
    fn prop_captures_are_subset(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let all = board.generate_moves();
        let captures = board.generate_captures();

        for &mv in &captures {
            prop_assert!(all.contains(mv));
            prop_assert!(board.piece_at(mv.to()).is_some() || mv.is_en_passant());
        }
        for &mv in &all {
            if !captures.contains(mv) {
                prop_assert!(board.piece_at(mv.to()).is_none());
                prop_assert!(!mv.is_en_passant());
            }
        }
    }

    /// Per-color occupancy equals the union of that color's piece boards,
    /// and the mailbox mirrors the bitboards square by square.
    #[test]
    fn prop_bitboards_match_mailbox(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use crate::board::{Bitboard, Color, Piece, Square};

        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        for color in [Color::White, Color::Black] {
            let mut union = Bitboard::EMPTY;
            for piece in [
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                union |= board.pieces_of(color, piece);
            }
            prop_assert_eq!(union, board.occupied[color.index()]);
        }

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            match board.piece_at(sq) {
                Some((color, piece)) => {
                    prop_assert!(board.pieces_of(color, piece).contains(sq));
                }
                None => {
                    prop_assert!(!board.occupied_all().contains(sq));
                }
            }
        }
    }

    /// Material tracks the mailbox contents.
    #[test]
    fn prop_material_matches_mailbox(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use crate::board::{Color, Square};

        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let mut totals = [0i32; 2];
        for idx in 0..64 {
            if let Some((color, piece)) = board.piece_at(Square::from_index(idx)) {
                totals[color.index()] += piece.value();
            }
        }
        prop_assert_eq!(board.material(Color::White), totals[0]);
        prop_assert_eq!(board.material(Color::Black), totals[1]);
    }
}
