//! Random Move Engine
//!
//! Selects moves uniformly at random from the side to move's candidate
//! moves. Useful for:
//! - Baseline comparisons (any real engine should beat this)
//! - Exercising the match infrastructure
//! - Stress testing move generation

use chess12_core::{color_moves, Board, Engine, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An engine that plays random candidate moves.
///
/// No evaluation at all; it is the simplest possible opponent.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let moves = color_moves(board, board.turn());
        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
