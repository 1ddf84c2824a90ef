use thiserror::Error;

use crate::types::Color;

/// Validation failures surfaced by [`crate::Board::move_piece`] and
/// [`crate::Board::castle`]. None are retryable and a rejected operation
/// leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("no piece at the origin square")]
    NoPieceAtOrigin,

    #[error("it is {turn}'s turn to move")]
    WrongTurn { turn: Color },

    #[error("the destination is not a valid move for this piece")]
    IllegalDestination,

    #[error("castling conditions not met")]
    CastlingPreconditionFailed,
}
