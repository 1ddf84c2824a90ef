//! Text form for squares and moves.
//!
//! A square on the bounded plane is written file letter plus rank digit
//! (`e2` = axis 0 value 4, axis 1 value 1). Nonzero unbounded axes are
//! appended as `@axis:value` groups, so `e2@4:-1` sits one step down
//! axis 4. A move is two squares separated by whitespace.

use crate::board::Board;
use crate::coord::{Coord, AXES, BOARD_SPAN, BOUNDED_AXES};
use crate::movegen;
use crate::types::Move;

pub fn square_to_text(at: Coord) -> String {
    debug_assert!(at.on_board());
    let mut out = String::new();
    out.push((b'a' + at.axis(0) as u8) as char);
    out.push((b'1' + at.axis(1) as u8) as char);
    for axis in BOUNDED_AXES..AXES {
        let v = at.axis(axis);
        if v != 0 {
            out.push_str(&format!("@{axis}:{v}"));
        }
    }
    out
}

pub fn parse_square(text: &str) -> Option<Coord> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')? as i16;
    let rank = bytes[1].checked_sub(b'1')? as i16;
    if file >= BOARD_SPAN || rank >= BOARD_SPAN {
        return None;
    }
    let mut at = Coord::plane(file, rank);

    let rest = &text[2..];
    if rest.is_empty() {
        return Some(at);
    }
    if !rest.starts_with('@') {
        return None;
    }
    for group in rest[1..].split('@') {
        let (axis, value) = group.split_once(':')?;
        let axis: usize = axis.parse().ok()?;
        let value: i16 = value.parse().ok()?;
        if !(BOUNDED_AXES..AXES).contains(&axis) {
            return None;
        }
        at = at.with_axis(axis, value);
    }
    Some(at)
}

pub fn move_to_text(mv: Move) -> String {
    format!("{} {}", square_to_text(mv.from), square_to_text(mv.to))
}

/// Parses `"<from> <to>"` and accepts it only when the destination is
/// among the origin piece's candidate moves.
pub fn parse_move(board: &Board, text: &str) -> Option<Move> {
    let mut parts = text.split_whitespace();
    let from = parse_square(parts.next()?)?;
    let to = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    if !movegen::piece_moves(board, from).contains(&to) {
        return None;
    }
    Some(Move::new(from, to))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
