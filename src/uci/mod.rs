//! UCI protocol driver.
//!
//! A line-based dispatcher on the main thread; `go` launches the search on
//! a single worker thread sharing only a cooperative stop flag. The
//! protocol is forgiving: unparseable input is logged and ignored, and the
//! next command re-synchronizes.

pub mod command;

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crate::board::Board;
use crate::perft;
use crate::search;
use crate::sync::StopFlag;

use command::{parse_go_params, parse_uci_command, UciCommand};

const ENGINE_NAME: &str = "Halcyon";
const ENGINE_AUTHOR: &str = "the Halcyon authors";

/// Root position as received: start position or FEN, plus the move list.
/// The worker rebuilds its own `Board` from this, so the driver and the
/// search never share position state.
#[derive(Clone, Debug)]
struct PositionSpec {
    startpos: bool,
    fen: String,
    moves: Vec<String>,
}

impl Default for PositionSpec {
    fn default() -> Self {
        PositionSpec {
            startpos: true,
            fen: String::new(),
            moves: Vec::new(),
        }
    }
}

fn parse_position(parts: &[String]) -> PositionSpec {
    let mut spec = PositionSpec::default();
    let mut i = 1;

    match parts.get(i).map(String::as_str) {
        Some("startpos") => {
            i += 1;
        }
        Some("fen") => {
            spec.startpos = false;
            i += 1;
            let mut fen_fields = Vec::new();
            while i < parts.len() && parts[i] != "moves" {
                fen_fields.push(parts[i].clone());
                i += 1;
            }
            spec.fen = fen_fields.join(" ");
        }
        _ => return spec,
    }

    if parts.get(i).map(String::as_str) == Some("moves") {
        i += 1;
        while i < parts.len() {
            spec.moves.push(parts[i].clone());
            i += 1;
        }
    }

    spec
}

/// Build a board from a position spec. A bad FEN falls back to the start
/// position; unparseable or illegal moves are skipped.
fn build_board(spec: &PositionSpec) -> Board {
    let mut board = if spec.startpos {
        Board::new()
    } else {
        match Board::try_from_fen(&spec.fen) {
            Ok(board) => board,
            Err(err) => {
                log::warn!("bad FEN '{}': {err}", spec.fen);
                Board::new()
            }
        }
    };

    for notation in &spec.moves {
        if let Err(err) = board.make_move_uci(notation) {
            log::warn!("skipping move '{notation}': {err}");
        }
    }

    board
}

struct Driver {
    running: bool,
    position: PositionSpec,
    stop: StopFlag,
    worker: Option<JoinHandle<()>>,
}

impl Driver {
    fn new() -> Self {
        Driver {
            running: true,
            position: PositionSpec::default(),
            stop: StopFlag::new(),
            worker: None,
        }
    }

    fn handle_line(&mut self, line: &str) {
        let Some(cmd) = parse_uci_command(line) else {
            return;
        };

        match cmd {
            UciCommand::Uci => {
                println!("id name {} {}", ENGINE_NAME, env!("CARGO_PKG_VERSION"));
                println!("id author {ENGINE_AUTHOR}");
                println!("uciok");
            }
            UciCommand::IsReady => println!("readyok"),
            UciCommand::UciNewGame => {}
            UciCommand::Position(parts) => self.position = parse_position(&parts),
            UciCommand::Go(parts) => self.go(&parts),
            UciCommand::Stop => self.stop_search(),
            UciCommand::Quit => {
                self.running = false;
                self.stop_search();
            }
            UciCommand::Perft(depth) => {
                let mut board = build_board(&self.position);
                perft::perft_divide(&mut board, depth);
            }
            UciCommand::Display => {
                print!("{}", build_board(&self.position));
            }
            UciCommand::Unknown(input) => log::debug!("ignoring unknown command '{input}'"),
        }
    }

    /// Launch the search worker. A `go` while a search is running is
    /// dropped; the previous worker is joined once it has finished.
    fn go(&mut self, parts: &[String]) {
        if let Some(worker) = &self.worker {
            if !worker.is_finished() {
                log::warn!("go while searching, dropped");
                return;
            }
        }
        self.stop_search();
        self.stop.reset();

        let part_refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        let params = parse_go_params(&part_refs);
        let spec = self.position.clone();
        let stop = self.stop.clone();

        self.worker = Some(thread::spawn(move || {
            let mut board = build_board(&spec);
            let report = search::search(&mut board, &params, &stop);
            println!("bestmove {}", report.best_move);
        }));
    }

    fn stop_search(&mut self) {
        self.stop.stop();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Run the UCI loop until `quit` or end of input.
pub fn run() {
    let stdin = io::stdin();
    let mut driver = Driver::new();
    let mut line = String::new();

    while driver.running {
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => driver.handle_line(&line),
        }
    }

    driver.stop_search();
}
