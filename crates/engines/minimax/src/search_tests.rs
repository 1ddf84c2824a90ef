use super::*;
use chess12_core::{Color, Coord, Piece, PieceKind};

fn piece(color: Color, kind: PieceKind) -> Piece {
    Piece::new(color, kind)
}

#[test]
fn finds_a_move_from_the_start_position() {
    // depth 1: the twelve-axis start position already has thousands of
    // candidate moves
    let board = Board::startpos();
    let mut nodes = 0;
    let clock = StopClock::new();
    clock.start(None);
    let outcome = pick_best_move(&board, 1, &mut nodes, &clock);
    assert!(outcome.best_move.is_some());
    assert!(nodes > 0);
    assert!(!outcome.stopped);
}

#[test]
fn finds_mate_in_one() {
    // black king boxed in at (4,4); pushing a pawn to (3,3) mates
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 4), piece(Color::Black, PieceKind::King));
    board.place_piece(Coord::plane(3, 4), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(4, 5), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(2, 3), piece(Color::White, PieceKind::Pawn));

    let mut nodes = 0;
    let clock = StopClock::new();
    clock.start(None);
    let outcome = pick_best_move(&board, 2, &mut nodes, &clock);

    let (mv, score) = outcome.best_move.expect("search should find a move");
    assert_eq!(score, MATE_SCORE);

    let mut played = board.clone();
    played.move_piece(mv.from, mv.to).unwrap();
    assert!(played.is_game_over());
    assert_eq!(played.winner(), Some(Color::White));
}

#[test]
fn finished_game_yields_no_move() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 4), piece(Color::Black, PieceKind::King));
    board.place_piece(Coord::plane(3, 4), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(4, 5), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(2, 3), piece(Color::White, PieceKind::Pawn));
    board
        .move_piece(Coord::plane(2, 3), Coord::plane(3, 3))
        .unwrap();
    assert!(board.is_game_over());

    let mut nodes = 0;
    let clock = StopClock::new();
    clock.start(None);
    let outcome = pick_best_move(&board, 2, &mut nodes, &clock);
    assert!(outcome.best_move.is_none());
}

#[test]
fn stopped_clock_aborts_immediately() {
    let board = Board::startpos();
    let mut nodes = 0;
    let clock = StopClock::new();
    clock.start(None);
    clock.stop();
    let outcome = pick_best_move(&board, 3, &mut nodes, &clock);
    assert!(outcome.stopped);
}
