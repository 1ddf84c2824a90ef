//! Plain-text rendering of the bounded plane.
//!
//! Every piece is projected onto axes 0-1 (file, rank); pieces that
//! differ only on unbounded axes land on the same cell, where the
//! highest coordinate wins.

use crate::board::Board;
use crate::coord::{Coord, BOARD_SPAN};
use crate::types::Piece;

pub fn board_grid(board: &Board) -> String {
    let span = BOARD_SPAN as usize;
    let mut grid = vec![vec!['.'; span]; span];

    let mut cells: Vec<(Coord, Piece)> = board.pieces().collect();
    cells.sort_unstable_by_key(|(c, _)| *c);
    for (at, piece) in cells {
        let (file, rank) = (at.axis(0), at.axis(1));
        if (0..BOARD_SPAN).contains(&file) && (0..BOARD_SPAN).contains(&rank) {
            grid[rank as usize][file as usize] = piece.symbol();
        }
    }

    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");
    for rank in (0..span).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..span {
            out.push(grid[rank][file]);
            out.push(' ');
        }
        out.push_str(&format!("{}\n", rank + 1));
    }
    out.push_str("  a b c d e f g h\n");
    out
}
