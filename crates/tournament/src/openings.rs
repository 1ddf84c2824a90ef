//! Randomized openings.
//!
//! There is no opening book for this board, so repeated games between
//! deterministic engines would all follow one line. Instead a seeded RNG
//! plays the first few plies uniformly at random: games diverge, yet
//! every game is reproducible from its seed.

use chess12_core::{color_moves, Board};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Play `plies` random moves on `board`, stopping early if the game ends
/// or a side runs out of candidates.
pub fn play_random_opening(board: &mut Board, plies: u32, rng: &mut StdRng) {
    for _ in 0..plies {
        if board.is_game_over() {
            break;
        }
        let moves = color_moves(board, board.turn());
        let Some(&mv) = moves.choose(rng) else { break };
        if board.move_piece(mv.from, mv.to).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "openings_tests.rs"]
mod openings_tests;
