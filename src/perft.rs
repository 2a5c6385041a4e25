//! Perft drivers: per-move divide output and the batch suite runner.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::timer::Timer;

/// Run perft at `depth` from the current position, printing each root
/// move's subtree leaf count in generation order, then the total with an
/// elapsed/nps summary. Returns the total leaf count.
pub fn perft_divide(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        println!("Leaf nodes: 1");
        return 1;
    }

    let timer = Timer::start();
    let mut nodes = 0u64;
    let moves = board.generate_moves();
    for &mv in &moves {
        board.make_move(mv);
        let move_nodes = board.perft(depth - 1);
        board.unmake_move(mv);
        println!("{mv}: {move_nodes}");
        nodes += move_nodes;
    }
    println!("Leaf nodes: {nodes}");
    print_rate(nodes, timer.elapsed_micros());
    nodes
}

fn print_rate(nodes: u64, elapsed_us: u64) {
    let secs = elapsed_us as f64 / 1e6;
    let mut nps = nodes as f64 / secs.max(1e-9);
    let mut prefix = "";
    if nps > 1e6 {
        prefix = "M";
        nps /= 1e6;
    } else if nps > 1e3 {
        prefix = "k";
        nps /= 1e3;
    }
    println!("Time elapsed: {secs:.2} s ({nps:.3} {prefix}nps)");
}

/// Result of a batch suite run.
#[derive(Clone, Debug, Default)]
pub struct SuiteSummary {
    pub correct: usize,
    pub total: usize,
    pub nodes: u64,
    /// FENs with at least one mismatching count.
    pub incorrect: Vec<String>,
}

/// One suite line: `FEN;D1 20;D2 400;…`. The depth fields tolerate a
/// leading `D`. Returns the FEN and the (depth, expected-nodes) pairs.
fn parse_suite_line(line: &str) -> Option<(String, Vec<(u32, u64)>)> {
    let mut fields = line.split(';');
    let fen = fields.next()?.trim().to_string();
    if fen.is_empty() {
        return None;
    }

    let mut expectations = Vec::new();
    for field in fields {
        let cleaned: String = field.chars().filter(|c| *c != 'D').collect();
        let mut tokens = cleaned.split_whitespace();
        let (Some(depth), Some(nodes)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let (Ok(depth), Ok(nodes)) = (depth.parse(), nodes.parse()) else {
            continue;
        };
        expectations.push((depth, nodes));
    }
    Some((fen, expectations))
}

/// Run every test in a perft suite file, printing progress and a final
/// tally. An unreadable file reports a zero-length run rather than failing.
pub fn run_suite(path: &Path) -> SuiteSummary {
    let mut summary = SuiteSummary::default();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("cannot read perft suite {}: {err}", path.display());
            return summary;
        }
    };

    let lines: Vec<&str> = contents.lines().collect();
    let timer = Timer::start();

    for (i, line) in lines.iter().enumerate() {
        let Some((fen, expectations)) = parse_suite_line(line) else {
            continue;
        };
        let Ok(mut board) = Board::try_from_fen(&fen) else {
            log::warn!("skipping unparseable suite FEN '{fen}'");
            continue;
        };

        println!("{}/{} FEN: {fen}", i, lines.len());
        let mut line_correct = true;
        for (depth, expected) in expectations {
            let result = board.perft(depth);
            println!("perft({depth}): {result} ({expected})");
            summary.nodes += result;
            summary.total += 1;
            if result == expected {
                summary.correct += 1;
            } else {
                line_correct = false;
            }
        }
        if !line_correct {
            summary.incorrect.push(fen);
        }
    }

    println!("Leaf nodes: {}", summary.nodes);
    print_rate(summary.nodes, timer.elapsed_micros());
    println!("{} out of {} correct.", summary.correct, summary.total);
    for fen in &summary.incorrect {
        println!("Incorrect: {fen}");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suite_line() {
        let (fen, expectations) = parse_suite_line(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1;D1 20;D2 400;D3 8902",
        )
        .unwrap();
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(expectations, vec![(1, 20), (2, 400), (3, 8902)]);
    }

    #[test]
    fn test_parse_suite_line_without_d_prefix() {
        let (_, expectations) = parse_suite_line("8/8/8/8/8/8/8/k1K5 w - - 0 1;1 3").unwrap();
        assert_eq!(expectations, vec![(1, 3)]);
    }

    #[test]
    fn test_parse_suite_line_skips_junk_fields() {
        let (_, expectations) =
            parse_suite_line("8/8/8/8/8/8/8/k1K5 w - - 0 1;D1 3;garbage;D2 x").unwrap();
        assert_eq!(expectations, vec![(1, 3)]);
    }

    #[test]
    fn test_empty_line_is_skipped() {
        assert!(parse_suite_line("").is_none());
    }

    #[test]
    fn test_missing_file_reports_zero_length_run() {
        let summary = run_suite(Path::new("/nonexistent/perft-suite.epd"));
        assert_eq!(summary.total, 0);
        assert_eq!(summary.nodes, 0);
        assert!(summary.incorrect.is_empty());
    }
}
