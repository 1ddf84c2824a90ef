//! Candidate move generation, one policy per piece kind.
//!
//! Policies compute where a piece could go from a given square without
//! consulting whose turn it is and without checking that the mover's own
//! king stays safe. King, Rook, Bishop, Queen and Knight accept only empty
//! on-board destinations; the Pawn is the only kind whose policy produces
//! a capturing destination (its diagonal rule, which requires an enemy
//! occupant). Sliding pieces stop at the first square that fails
//! acceptance and never include the blocker itself.

use crate::board::Board;
use crate::coord::{Coord, AXES, BOARD_SPAN};
use crate::types::{Color, Move, PieceKind};

/// Longest slide along any direction.
const MAX_SLIDE: i16 = BOARD_SPAN - 1;

/// Axis pairs times the eight L-shaped magnitude patterns.
pub const KNIGHT_LEAP_COUNT: usize = AXES * (AXES - 1) / 2 * 8;

/// Pre-computed knight leap vectors: for every unordered axis pair, the
/// eight displacements putting +-2 on one axis and +-1 on the other.
pub static KNIGHT_LEAPS: [[i16; AXES]; KNIGHT_LEAP_COUNT] = {
    let patterns: [(i16, i16); 8] = [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ];
    let mut leaps = [[0i16; AXES]; KNIGHT_LEAP_COUNT];
    let mut n = 0;
    let mut i = 0;
    while i < AXES {
        let mut j = i + 1;
        while j < AXES {
            let mut p = 0;
            while p < patterns.len() {
                leaps[n][i] = patterns[p].0;
                leaps[n][j] = patterns[p].1;
                n += 1;
                p += 1;
            }
            j += 1;
        }
        i += 1;
    }
    leaps
};

/// Candidate destinations for the piece standing at `from`.
///
/// Returns an empty list when the square is empty.
pub fn piece_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::King => gen_king(board, from, &mut out),
        PieceKind::Rook => gen_rook(board, from, &mut out),
        PieceKind::Bishop => gen_bishop(board, from, &mut out),
        PieceKind::Queen => {
            // Union of the rook and bishop rules; single- and dual-axis
            // displacements never coincide, so no dedup is needed.
            gen_rook(board, from, &mut out);
            gen_bishop(board, from, &mut out);
        }
        PieceKind::Knight => gen_knight(board, from, &mut out),
        PieceKind::Pawn => gen_pawn(board, from, piece.color, &mut out),
    }
    out
}

/// Every `(from, to)` candidate for one side, in a deterministic order
/// regardless of board map iteration.
pub fn color_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut origins: Vec<Coord> = board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .map(|(c, _)| c)
        .collect();
    origins.sort_unstable();

    let mut out = Vec::new();
    for from in origins {
        for to in piece_moves(board, from) {
            out.push(Move::new(from, to));
        }
    }
    out
}

fn gen_king(board: &Board, from: Coord, out: &mut Vec<Coord>) {
    for axis in 0..AXES {
        for sign in [-1i16, 1] {
            let to = from.offset(axis, sign);
            if to.on_board() && board.piece_at(to).is_none() {
                out.push(to);
            }
        }
    }
}

fn gen_rook(board: &Board, from: Coord, out: &mut Vec<Coord>) {
    for axis in 0..AXES {
        for sign in [-1i16, 1] {
            for dist in 1..=MAX_SLIDE {
                let to = from.offset(axis, sign * dist);
                if to.on_board() && board.piece_at(to).is_none() {
                    out.push(to);
                } else {
                    break;
                }
            }
        }
    }
}

fn gen_bishop(board: &Board, from: Coord, out: &mut Vec<Coord>) {
    for i in 0..AXES {
        for j in (i + 1)..AXES {
            for sign_i in [-1i16, 1] {
                for sign_j in [-1i16, 1] {
                    for dist in 1..=MAX_SLIDE {
                        let to = from.offset(i, sign_i * dist).offset(j, sign_j * dist);
                        if to.on_board() && board.piece_at(to).is_none() {
                            out.push(to);
                        } else {
                            break;
                        }
                    }
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: Coord, out: &mut Vec<Coord>) {
    for leap in KNIGHT_LEAPS.iter() {
        let to = from.shift(leap);
        if to.on_board() && board.piece_at(to).is_none() {
            out.push(to);
        }
    }
}

fn gen_pawn(board: &Board, from: Coord, color: Color, out: &mut Vec<Coord>) {
    let dir: i16 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let home_rank: i16 = match color {
        Color::White => 1,
        Color::Black => 6,
    };

    // Forward one, and forward two from the home rank; the double step is
    // only offered when the single step is itself open.
    let forward_one = from.offset(0, dir);
    if forward_one.on_board() && board.piece_at(forward_one).is_none() {
        out.push(forward_one);

        if from.axis(0) == home_rank {
            let forward_two = from.offset(0, 2 * dir);
            if forward_two.on_board() && board.piece_at(forward_two).is_none() {
                out.push(forward_two);
            }
        }
    }

    // Diagonal captures: one forward step on axis 0 combined with a unit
    // step on any other axis, onto an enemy-occupied square.
    for axis in 1..AXES {
        for side in [1i16, -1] {
            let capture = from.offset(0, dir).offset(axis, side);
            if !capture.on_board() {
                continue;
            }
            if let Some(target) = board.piece_at(capture) {
                if target.color != color {
                    out.push(capture);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
