//! Negamax search with alpha-beta pruning.

use chess12_core::{color_moves, Board, Move, StopClock};

use crate::eval::evaluate;

/// Score of a position where the side to move has been checkmated.
pub const MATE_SCORE: i32 = 100_000;

/// Result from `pick_best_move` indicating whether search completed or
/// was stopped.
pub struct SearchOutcome {
    /// Best move found (if any candidate moves exist)
    pub best_move: Option<(Move, i32)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches the position and returns the best move with its score.
pub fn pick_best_move(
    board: &Board,
    depth: u8,
    nodes: &mut u64,
    clock: &StopClock,
) -> SearchOutcome {
    if board.is_game_over() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }
    let moves = color_moves(board, board.turn());
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            stopped: false,
        };
    }

    let mut best = moves[0];
    let mut best_score = i32::MIN + 1;
    let mut stopped = false;

    for mv in moves {
        // Check time before starting each root move
        if clock.should_check(*nodes) && clock.check() {
            stopped = true;
            break;
        }

        let mut child = board.clone();
        if child.move_piece(mv.from, mv.to).is_err() {
            continue;
        }
        *nodes += 1;

        let (score, was_stopped) = negamax(
            &child,
            depth.saturating_sub(1),
            i32::MIN / 2,
            i32::MAX / 2,
            nodes,
            clock,
        );
        let score = -score;

        if was_stopped {
            stopped = true;
            break;
        }

        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    SearchOutcome {
        best_move: Some((best, best_score)),
        stopped,
    }
}

/// Recursive negamax with alpha-beta pruning.
///
/// Returns (score, stopped) where stopped indicates the search was
/// aborted on time.
fn negamax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
    clock: &StopClock,
) -> (i32, bool) {
    // Check time periodically
    if clock.should_check(*nodes) && clock.check() {
        return (0, true);
    }

    // The game only ends by checkmate, so a finished game means the side
    // to move has been mated.
    if board.is_game_over() {
        return (-MATE_SCORE, false);
    }

    if depth == 0 {
        return (evaluate(board), false);
    }

    // A side with no candidates is not terminal here; it just has nothing
    // better than its static evaluation.
    let moves = color_moves(board, board.turn());
    if moves.is_empty() {
        return (evaluate(board), false);
    }

    let mut best = i32::MIN + 1;

    for mv in moves {
        let mut child = board.clone();
        if child.move_piece(mv.from, mv.to).is_err() {
            continue;
        }
        *nodes += 1;

        let (score, stopped) = negamax(&child, depth - 1, -beta, -alpha, nodes, clock);
        let score = -score;

        if stopped {
            return (best, true);
        }

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
