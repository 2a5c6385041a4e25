use crate::board::MAX_PLYS;

/// Deepest nominal search depth; bounded by the undo stack.
pub const MAX_SEARCH_DEPTH: u32 = (MAX_PLYS - 1) as u32;

/// Parameters of one `go` command.
#[derive(Clone, Debug)]
pub struct SearchParams {
    pub wtime_ms: u64,
    pub btime_ms: u64,
    pub winc_ms: u64,
    pub binc_ms: u64,
    pub moves_to_go: Option<u32>,
    pub max_depth: u32,
    pub max_nodes: u64,
    pub movetime_ms: Option<u64>,
    pub mate_in: Option<u32>,
    pub infinite: bool,
    pub ponder: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            wtime_ms: 0,
            btime_ms: 0,
            winc_ms: 0,
            binc_ms: 0,
            moves_to_go: None,
            max_depth: MAX_SEARCH_DEPTH,
            max_nodes: u64::MAX,
            movetime_ms: None,
            mate_in: None,
            infinite: false,
            ponder: false,
        }
    }
}

impl SearchParams {
    /// A fixed-depth search, unconstrained by the clock. Used by tests and
    /// benchmarks.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchParams {
            max_depth: depth,
            ..SearchParams::default()
        }
    }
}
