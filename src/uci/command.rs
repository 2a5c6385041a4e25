//! UCI command parsing.

use crate::search::{SearchParams, MAX_SEARCH_DEPTH};

#[derive(Debug, Clone)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    Perft(u32),
    Stop,
    Quit,
    Display,
    Unknown(String),
}

/// Parse one input line into a command. Empty lines parse to `None`;
/// anything unrecognized becomes `Unknown` so the caller can log it.
#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();

    let cmd = match parts[0] {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(owned_parts()),
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse().ok()).unwrap_or(1);
            UciCommand::Perft(depth)
        }
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        "d" => UciCommand::Display,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Parse the next parameter value as type T.
#[inline]
fn parse_next<T: std::str::FromStr>(parts: &[&str], i: usize) -> Option<T> {
    parts.get(i + 1).and_then(|v| v.parse::<T>().ok())
}

/// Parse the sub-tokens of a `go` command. Unrecognized tokens are
/// ignored; `infinite` forces the maximum depth and no deadline.
#[must_use]
pub fn parse_go_params(parts: &[&str]) -> SearchParams {
    let mut params = SearchParams::default();
    let mut i = 1;

    while i < parts.len() {
        let consumed = match parts[i] {
            "wtime" => {
                if let Some(v) = parse_next(parts, i) {
                    params.wtime_ms = v;
                }
                2
            }
            "btime" => {
                if let Some(v) = parse_next(parts, i) {
                    params.btime_ms = v;
                }
                2
            }
            "winc" => {
                if let Some(v) = parse_next(parts, i) {
                    params.winc_ms = v;
                }
                2
            }
            "binc" => {
                if let Some(v) = parse_next(parts, i) {
                    params.binc_ms = v;
                }
                2
            }
            "movestogo" => {
                params.moves_to_go = parse_next(parts, i);
                2
            }
            "depth" => {
                if let Some(v) = parse_next(parts, i) {
                    params.max_depth = v;
                }
                2
            }
            "nodes" => {
                if let Some(v) = parse_next(parts, i) {
                    params.max_nodes = v;
                }
                2
            }
            "movetime" => {
                params.movetime_ms = parse_next(parts, i);
                2
            }
            "mate" => {
                params.mate_in = parse_next(parts, i);
                2
            }
            "infinite" => {
                params.infinite = true;
                params.max_depth = MAX_SEARCH_DEPTH;
                1
            }
            "ponder" => {
                params.ponder = true;
                1
            }
            // "searchmoves" and anything else: skip.
            _ => 1,
        };
        i += consumed;
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(parse_uci_command("uci"), Some(UciCommand::Uci)));
        assert!(matches!(
            parse_uci_command("isready"),
            Some(UciCommand::IsReady)
        ));
        assert!(matches!(parse_uci_command("stop"), Some(UciCommand::Stop)));
        assert!(matches!(parse_uci_command("quit"), Some(UciCommand::Quit)));
        assert!(matches!(parse_uci_command("d"), Some(UciCommand::Display)));
        assert!(parse_uci_command("   ").is_none());
    }

    #[test]
    fn test_parse_perft_depth() {
        assert!(matches!(
            parse_uci_command("perft 5"),
            Some(UciCommand::Perft(5))
        ));
        // Missing or unparseable depth falls back to 1.
        assert!(matches!(
            parse_uci_command("perft"),
            Some(UciCommand::Perft(1))
        ));
        assert!(matches!(
            parse_uci_command("perft x"),
            Some(UciCommand::Perft(1))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse_uci_command("xyzzy 1 2"),
            Some(UciCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_parse_go_clock_params() {
        let parts = [
            "go", "wtime", "60000", "btime", "55000", "winc", "1000", "binc", "900", "movestogo",
            "20",
        ];
        let params = parse_go_params(&parts);
        assert_eq!(params.wtime_ms, 60_000);
        assert_eq!(params.btime_ms, 55_000);
        assert_eq!(params.winc_ms, 1000);
        assert_eq!(params.binc_ms, 900);
        assert_eq!(params.moves_to_go, Some(20));
    }

    #[test]
    fn test_parse_go_depth_and_nodes() {
        let params = parse_go_params(&["go", "depth", "6", "nodes", "100000"]);
        assert_eq!(params.max_depth, 6);
        assert_eq!(params.max_nodes, 100_000);
    }

    #[test]
    fn test_parse_go_infinite() {
        let params = parse_go_params(&["go", "infinite"]);
        assert!(params.infinite);
        assert_eq!(params.max_depth, MAX_SEARCH_DEPTH);
    }

    #[test]
    fn test_parse_go_ignores_unknown_tokens() {
        let params = parse_go_params(&["go", "searchmoves", "e2e4", "frobnicate", "depth", "3"]);
        assert_eq!(params.max_depth, 3);
    }

    #[test]
    fn test_parse_go_movetime() {
        let params = parse_go_params(&["go", "movetime", "2500"]);
        assert_eq!(params.movetime_ms, Some(2500));
    }
}
