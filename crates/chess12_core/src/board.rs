use std::collections::HashMap;

use crate::coord::{Coord, BOARD_SPAN};
use crate::error::MoveError;
use crate::movegen;
use crate::types::{CastleSide, Color, Piece, PieceKind};

/// Axis-0 rank at which a pawn of `color` promotes.
fn promotion_rank(color: Color) -> i16 {
    match color {
        Color::White => BOARD_SPAN - 1,
        Color::Black => 0,
    }
}

/// Sparse board state: a map from coordinates to pieces plus turn,
/// castling and termination bookkeeping.
///
/// The board owns every piece by position; absence of a key means an
/// empty square. All mutation goes through [`Board::move_piece`],
/// [`Board::castle`] and the setup helpers, and a rejected operation
/// leaves the state completely unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pieces: HashMap<Coord, Piece>,
    turn: Color,
    king_moved: [bool; 2],
    rook_moved: [[bool; 2]; 2],
    game_over: bool,
    winner: Option<Color>,
}

impl Board {
    /// Empty board, White to move.
    pub fn new() -> Self {
        Self {
            pieces: HashMap::new(),
            turn: Color::White,
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            game_over: false,
            winner: None,
        }
    }

    /// Standard arrangement oriented along the pawn axis: each side's
    /// pieces sit at axis-0 ranks 0/1 (White) and 7/6 (Black), deployed
    /// across axis 1, with every unbounded axis at zero.
    pub fn startpos() -> Self {
        let mut board = Self::new();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (i, &kind) in back.iter().enumerate() {
            let file = i as i16;
            board.place_piece(Coord::plane(0, file), Piece::new(Color::White, kind));
            board.place_piece(Coord::plane(7, file), Piece::new(Color::Black, kind));
        }
        for file in 0..BOARD_SPAN {
            board.place_piece(
                Coord::plane(1, file),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.place_piece(
                Coord::plane(6, file),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
        }
        board
    }

    /// Setup hook: puts a piece on a square, replacing any occupant.
    pub fn place_piece(&mut self, at: Coord, piece: Piece) {
        self.pieces.insert(at, piece);
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.pieces.get(&at).copied()
    }

    /// Iterate over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces.iter().map(|(c, p)| (*c, *p))
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winning color once the game has ended by checkmate.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.pieces
            .iter()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(c, _)| *c)
    }

    fn rook_square(&self, color: Color, side: CastleSide) -> Option<Coord> {
        let home_file = match side {
            CastleSide::Kingside => BOARD_SPAN - 1,
            CastleSide::Queenside => 0,
        };
        self.pieces
            .iter()
            .filter(|(c, p)| {
                p.kind == PieceKind::Rook && p.color == color && c.axis(0) == home_file
            })
            .map(|(c, _)| *c)
            .min()
    }

    /// Validates and applies a move for the side to move.
    ///
    /// On success the piece is relocated (replacing any occupant of
    /// `to`), pawn promotion is applied, the turn flips, and the new
    /// side to move is tested for checkmate; if mated, the game ends and
    /// the mover is recorded as winner.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtOrigin)?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn { turn: self.turn });
        }
        if !movegen::piece_moves(self, from).contains(&to) {
            return Err(MoveError::IllegalDestination);
        }

        self.pieces.remove(&from);
        self.pieces.insert(to, piece);

        if piece.kind == PieceKind::Pawn && to.axis(0) == promotion_rank(piece.color) {
            self.pieces
                .insert(to, Piece::new(piece.color, PieceKind::Queen));
        }

        match piece.kind {
            PieceKind::King => self.king_moved[piece.color.idx()] = true,
            PieceKind::Rook => {
                if from.axis(0) == BOARD_SPAN - 1 {
                    self.rook_moved[piece.color.idx()][CastleSide::Kingside.idx()] = true;
                } else if from.axis(0) == 0 {
                    self.rook_moved[piece.color.idx()][CastleSide::Queenside.idx()] = true;
                }
            }
            _ => {}
        }

        self.turn = self.turn.other();
        if self.is_checkmate(self.turn) {
            self.game_over = true;
            self.winner = Some(self.turn.other());
        }
        Ok(())
    }

    /// Whether any piece of `by` has `target` among its candidate moves.
    ///
    /// Empty squares are reachable through ordinary movement; occupied
    /// squares only through the pawn capture rule.
    pub fn is_square_attacked(&self, target: Coord, by: Color) -> bool {
        self.pieces
            .iter()
            .filter(|(_, p)| p.color == by)
            .any(|(c, _)| movegen::piece_moves(self, *c).contains(&target))
    }

    /// A color with no king on the board is not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.other()),
            None => false,
        }
    }

    /// Exhaustive mate test: for every piece of `color` and every
    /// candidate destination, relocate, re-test check, and restore. The
    /// board is returned to its exact pre-call state whatever the
    /// outcome.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        let own: Vec<Coord> = self
            .pieces
            .iter()
            .filter(|(_, p)| p.color == color)
            .map(|(c, _)| *c)
            .collect();
        for from in own {
            for to in movegen::piece_moves(self, from) {
                if self.escapes_check(color, from, to) {
                    return false;
                }
            }
        }
        true
    }

    /// One probe of the mate search: play `from -> to`, test check,
    /// then undo unconditionally.
    fn escapes_check(&mut self, color: Color, from: Coord, to: Coord) -> bool {
        let moved = match self.pieces.remove(&from) {
            Some(p) => p,
            None => return false,
        };
        let displaced = self.pieces.insert(to, moved);

        let safe = !self.is_in_check(color);

        if let Some(moved) = self.pieces.remove(&to) {
            self.pieces.insert(from, moved);
        }
        if let Some(displaced) = displaced {
            self.pieces.insert(to, displaced);
        }
        safe
    }

    /// All castling preconditions for `color` on `side`: game running,
    /// king and home-file rook present and unmoved, not currently in
    /// check, and every square strictly between king and rook (along
    /// axis 0, other coordinates taken from the king) empty and
    /// unattacked.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if self.game_over {
            return false;
        }
        let king = match self.king_square(color) {
            Some(c) => c,
            None => return false,
        };
        if self.rook_square(color, side).is_none() {
            return false;
        }
        if self.king_moved[color.idx()] || self.rook_moved[color.idx()][side.idx()] {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }

        let transit = match side {
            CastleSide::Kingside => (king.axis(0) + 1)..(BOARD_SPAN - 1),
            CastleSide::Queenside => 1..king.axis(0),
        };
        for file in transit {
            let square = king.with_axis(0, file);
            if self.piece_at(square).is_some() || self.is_square_attacked(square, color.other()) {
                return false;
            }
        }
        true
    }

    /// Re-validates via [`Board::can_castle`], then relocates the king
    /// to axis-0 file 6 (kingside) or 2 (queenside) and the rook to 5
    /// or 3, all other coordinates unchanged. Does not flip the turn.
    pub fn castle(&mut self, color: Color, side: CastleSide) -> Result<(), MoveError> {
        if !self.can_castle(color, side) {
            return Err(MoveError::CastlingPreconditionFailed);
        }
        let (king_from, rook_from) = match (self.king_square(color), self.rook_square(color, side))
        {
            (Some(k), Some(r)) => (k, r),
            _ => return Err(MoveError::CastlingPreconditionFailed),
        };

        let (king_file, rook_file) = match side {
            CastleSide::Kingside => (6, 5),
            CastleSide::Queenside => (2, 3),
        };
        if let Some(king) = self.pieces.remove(&king_from) {
            self.pieces.insert(king_from.with_axis(0, king_file), king);
        }
        if let Some(rook) = self.pieces.remove(&rook_from) {
            self.pieces.insert(rook_from.with_axis(0, rook_file), rook);
        }
        self.king_moved[color.idx()] = true;
        self.rook_moved[color.idx()][side.idx()] = true;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
