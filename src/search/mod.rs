//! Iterative-deepening negamax search with alpha-beta pruning, quiescence
//! and MVV-LVA move ordering.

mod move_order;
mod params;
mod quiescence;

pub use params::{SearchParams, MAX_SEARCH_DEPTH};

use crate::board::{Board, Color, Move};
use crate::eval::{is_mate, mate, plies_till_mate, Value, DRAW, VALUE_MAX, VALUE_MIN};
use crate::sync::StopFlag;
use crate::timer::Timer;
use move_order::sort_moves;

/// Fallback when the go command carries no movestogo.
const DEFAULT_MOVES_TO_GO: u64 = 28;

/// Predicted cost of the next iteration relative to the last one.
const GROWTH_RATIO: u64 = 12;

/// Outcome of a completed (or stopped) search.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// Best move found; null when the root has no legal moves.
    pub best_move: Move,
    /// Score of the deepest completed iteration, from the mover's view.
    pub score: Value,
    /// Deepest completed iteration.
    pub depth: u32,
    /// Total nodes searched.
    pub nodes: u64,
}

pub(crate) struct SearchContext<'a> {
    pub(crate) board: &'a mut Board,
    pub(crate) stop: &'a StopFlag,
    pub(crate) nodes: u64,
    pub(crate) seldepth: u32,
    pub(crate) best_move: Move,
}

impl SearchContext<'_> {
    /// Fail-hard negamax. The stop flag is polled after every searched
    /// move; a stopped search unwinds to the root keeping the best line
    /// found so far.
    fn negamax(
        &mut self,
        mut alpha: Value,
        beta: Value,
        depth: u32,
        max_depth: u32,
        is_root: bool,
    ) -> Value {
        if depth > self.seldepth {
            self.seldepth = depth;
        }
        if depth >= max_depth {
            return self.quiescence(alpha, beta, depth + 1);
        }
        self.nodes += 1;

        let mut moves = self.board.generate_moves();
        sort_moves(self.board, &mut moves);

        if moves.is_empty() {
            return if self.board.in_check() {
                mate(depth as Value)
            } else {
                DRAW
            };
        }

        for &mv in &moves {
            self.board.make_move(mv);
            let value = -self.negamax(-beta, -alpha, depth + 1, max_depth, false);
            self.board.unmake_move(mv);

            if value >= beta {
                return beta;
            }
            if value > alpha {
                alpha = value;
                if is_root {
                    self.best_move = mv;
                }
            }
            if self.stop.is_stopped() {
                return alpha;
            }
        }

        alpha
    }
}

/// Per-move time budget in microseconds.
fn allocated_time_us(board: &Board, params: &SearchParams) -> u64 {
    if let Some(movetime) = params.movetime_ms {
        return movetime.saturating_mul(1000);
    }
    let player_time_ms = match board.side_to_move() {
        Color::White => params.wtime_ms,
        Color::Black => params.btime_ms,
    };
    if player_time_ms == 0 {
        // No clock given: depth- or node-limited search, no deadline.
        return u64::MAX;
    }
    let moves_to_go = params.moves_to_go.map_or(DEFAULT_MOVES_TO_GO, u64::from);
    player_time_ms.saturating_mul(1000) / moves_to_go.max(1)
}

/// Iterative-deepening driver. Searches depth 1, 2, ... up to the depth
/// limit, reporting an `info` line per completed depth, and stops when the
/// stop flag is raised, the budget is spent, or the next iteration is
/// predicted to blow it.
pub fn search(board: &mut Board, params: &SearchParams, stop: &StopFlag) -> SearchReport {
    let allocated_us = allocated_time_us(board, params);
    let budget_us = allocated_us.saturating_add(allocated_us / 10 * 3);
    let max_depth = params.max_depth.clamp(1, MAX_SEARCH_DEPTH);

    let mut ctx = SearchContext {
        board,
        stop,
        nodes: 0,
        seldepth: 0,
        best_move: Move::null(),
    };

    let total = Timer::start();
    let mut report = SearchReport {
        best_move: Move::null(),
        score: 0,
        depth: 0,
        nodes: 0,
    };

    for depth in 1..=max_depth {
        ctx.seldepth = 0;
        let depth_start_nodes = ctx.nodes;
        let depth_timer = Timer::start();

        let value = ctx.negamax(VALUE_MIN, VALUE_MAX, 0, depth, true);

        let depth_us = depth_timer.elapsed_micros().max(1);
        let nodes_searched = ctx.nodes - depth_start_nodes;
        let nps = nodes_searched.saturating_mul(1_000_000) / depth_us;

        report.best_move = ctx.best_move;
        report.score = value;
        report.depth = depth;

        let score = if is_mate(value) {
            let plies = plies_till_mate(value);
            format!("mate {}", (plies + 1) / 2)
        } else {
            format!("cp {value}")
        };
        println!(
            "info depth {depth} seldepth {} nodes {nodes_searched} nps {nps} score {score} pv {}",
            ctx.seldepth, ctx.best_move
        );

        if stop.is_stopped() || total.elapsed_micros() > allocated_us {
            break;
        }
        // Iterations grow sharply; bail out early when the next one is
        // predicted to overshoot the budget.
        let predicted_us = depth_us.saturating_mul(GROWTH_RATIO);
        if total.elapsed_micros().saturating_add(predicted_us) > budget_us {
            break;
        }
        if ctx.nodes >= params.max_nodes {
            break;
        }
    }

    report.nodes = ctx.nodes;
    report
}
