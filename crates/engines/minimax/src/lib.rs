//! Minimax engine
//!
//! Negamax search with alpha-beta pruning and material-based evaluation.
//! This is the in-repo opponent for interactive play and the baseline
//! for engine-vs-engine matches.

mod eval;
mod search;

use chess12_core::{Board, Engine, SearchLimits, SearchResult};

/// Engine using negamax with alpha-beta pruning.
///
/// The rules engine mutates boards in place and exposes no undo, so the
/// search plays each trial move on a clone. Boards are small sparse maps
/// and search depths are shallow, which keeps that affordable.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome = search::pick_best_move(board, limits.depth, &mut self.nodes, &limits.clock);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::MATE_SCORE;
