use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    file_to_index, rank_to_index, Board, Color, Move, Piece, Square, BLACK_KINGSIDE,
    BLACK_QUEENSIDE, NO_CASTLING, WHITE_KINGSIDE, WHITE_QUEENSIDE,
};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to 0
    /// and 1. Extra whitespace between fields is tolerated.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields { found: parts.len() });
        }

        let mut board = Board::blank();

        // Piece placement, rank 8 down to rank 1.
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidPlacement);
            }
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    if file >= 8 {
                        return Err(FenError::InvalidPlacement);
                    }
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                    board.put_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = NO_CASTLING;
        for c in parts[2].chars() {
            match c {
                'K' => rights |= WHITE_KINGSIDE,
                'Q' => rights |= WHITE_QUEENSIDE,
                'k' => rights |= BLACK_KINGSIDE,
                'q' => rights |= BLACK_QUEENSIDE,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { castling: c }),
            }
        }
        board.undo[0].castling_rights = rights;

        board.undo[0].en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|()| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        board.undo[0].halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        board.fullmove = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        board.undo[0].hash = board.calculate_hash();
        Ok(board)
    }

    /// The canonical FEN string for the current position: empty-run
    /// compression, side to move, castling flags in KQkq order, en-passant
    /// target, halfmove clock and fullmove number.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };

        let mut castling = String::new();
        let rights = self.castling_rights();
        if rights & WHITE_KINGSIDE != 0 {
            castling.push('K');
        }
        if rights & WHITE_QUEENSIDE != 0 {
            castling.push('Q');
        }
        if rights & BLACK_KINGSIDE != 0 {
            castling.push('k');
        }
        if rights & BLACK_QUEENSIDE != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            castling,
            ep,
            self.halfmove_clock(),
            self.fullmove
        )
    }

    /// Parse a move in long algebraic notation (e.g. "e2e4", "e7e8q") by
    /// matching it against the legal moves of the current position.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.len(),
            });
        }

        let chars: Vec<char> = notation.chars().collect();
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            });
        }

        let from = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if notation.len() == 5 {
            let piece =
                Piece::from_char(chars[4]).ok_or(MoveParseError::InvalidPromotion {
                    promotion: chars[4],
                })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion {
                    promotion: chars[4],
                });
            }
            Some(piece)
        } else {
            None
        };

        for &legal in &self.generate_moves() {
            if legal.from() == from && legal.to() == to && legal.promotion_piece() == promotion {
                return Ok(legal);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }

    /// Parse a long-algebraic move and play it in one call.
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
