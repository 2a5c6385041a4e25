use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// ASCII board with legends, followed by the FEN, the hash in hex and
    /// the threefold-repetition state. This is the `d` command output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   | a | b | c | d | e | f | g | h |")?;
        writeln!(f, "---+---+---+---+---+---+---+---+---+---")?;
        for rank in (0..8).rev() {
            write!(f, " {} |", rank + 1)?;
            for file in 0..8 {
                let c = match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => ' ',
                };
                write!(f, " {c} |")?;
            }
            writeln!(f, " {}", rank + 1)?;
            writeln!(f, "---+---+---+---+---+---+---+---+---+---")?;
        }
        writeln!(f, "   | a | b | c | d | e | f | g | h |")?;
        writeln!(f)?;
        writeln!(f, "FEN: {}", self.to_fen())?;
        writeln!(f, "Hash: {:x}", self.hash())?;
        writeln!(f, "3x rep: {}", self.is_3x_repeat())
    }
}
