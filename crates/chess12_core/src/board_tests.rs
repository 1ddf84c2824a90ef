use super::*;

fn piece(color: Color, kind: PieceKind) -> Piece {
    Piece::new(color, kind)
}

/// Four white pawns boxing in the black king at (4,4): one checker away.
/// Moving the pawn at (2,3) to (3,3) delivers checkmate.
fn near_mate_board() -> Board {
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 4), piece(Color::Black, PieceKind::King));
    board.place_piece(Coord::plane(3, 4), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(4, 5), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(2, 5), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(2, 3), piece(Color::White, PieceKind::Pawn));
    board
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn startpos_has_32_pieces_white_to_move() {
    let board = Board::startpos();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(board.turn(), Color::White);
    assert!(!board.is_game_over());
    assert_eq!(
        board.piece_at(Coord::plane(0, 4)),
        Some(piece(Color::White, PieceKind::King))
    );
    assert_eq!(
        board.piece_at(Coord::plane(6, 0)),
        Some(piece(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(board.king_square(Color::Black), Some(Coord::plane(7, 4)));
}

#[test]
fn place_piece_replaces_occupant() {
    let mut board = Board::new();
    let at = Coord::plane(2, 2);
    board.place_piece(at, piece(Color::White, PieceKind::Rook));
    board.place_piece(at, piece(Color::Black, PieceKind::Knight));
    assert_eq!(board.piece_at(at), Some(piece(Color::Black, PieceKind::Knight)));
    assert_eq!(board.pieces().count(), 1);
}

// =============================================================================
// move_piece validation
// =============================================================================

#[test]
fn rejects_empty_origin_and_leaves_board_unchanged() {
    let mut board = Board::startpos();
    let before = board.clone();
    let err = board.move_piece(Coord::plane(4, 4), Coord::plane(5, 4));
    assert_eq!(err, Err(MoveError::NoPieceAtOrigin));
    assert_eq!(board, before);
}

#[test]
fn rejects_moving_out_of_turn() {
    let mut board = Board::startpos();
    let before = board.clone();
    let err = board.move_piece(Coord::plane(6, 0), Coord::plane(5, 0));
    assert_eq!(err, Err(MoveError::WrongTurn { turn: Color::White }));
    assert_eq!(board, before);
}

#[test]
fn rejects_illegal_destination() {
    let mut board = Board::startpos();
    let before = board.clone();
    // pawn cannot advance three squares
    let err = board.move_piece(Coord::plane(1, 0), Coord::plane(4, 0));
    assert_eq!(err, Err(MoveError::IllegalDestination));
    assert_eq!(board, before);
}

#[test]
fn rejects_any_move_after_game_over() {
    let mut board = near_mate_board();
    board
        .move_piece(Coord::plane(2, 3), Coord::plane(3, 3))
        .unwrap();
    assert!(board.is_game_over());

    let before = board.clone();
    let err = board.move_piece(Coord::plane(3, 4), Coord::plane(4, 3));
    assert_eq!(err, Err(MoveError::GameOver));
    assert_eq!(board, before);
}

// =============================================================================
// move_piece application
// =============================================================================

#[test]
fn turn_alternates_after_each_move() {
    let mut board = Board::startpos();
    assert_eq!(board.turn(), Color::White);
    board
        .move_piece(Coord::plane(1, 0), Coord::plane(2, 0))
        .unwrap();
    assert_eq!(board.turn(), Color::Black);
    board
        .move_piece(Coord::plane(6, 0), Coord::plane(5, 0))
        .unwrap();
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn relocation_empties_the_origin() {
    let mut board = Board::startpos();
    board
        .move_piece(Coord::plane(1, 3), Coord::plane(3, 3))
        .unwrap();
    assert_eq!(board.piece_at(Coord::plane(1, 3)), None);
    assert_eq!(
        board.piece_at(Coord::plane(3, 3)),
        Some(piece(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn pawn_promotes_to_queen_on_far_rank() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(6, 2), piece(Color::White, PieceKind::Pawn));
    board
        .move_piece(Coord::plane(6, 2), Coord::plane(7, 2))
        .unwrap();
    assert_eq!(
        board.piece_at(Coord::plane(7, 2)),
        Some(piece(Color::White, PieceKind::Queen))
    );
}

#[test]
fn black_pawn_promotes_on_rank_zero() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(1, 2), piece(Color::Black, PieceKind::Pawn));
    // give White something to move first
    board.place_piece(Coord::plane(4, 7), piece(Color::White, PieceKind::Knight));
    let knight_to = Coord::plane(4, 7).with_axis(2, 2).with_axis(3, 1);
    board.move_piece(Coord::plane(4, 7), knight_to).unwrap();

    board
        .move_piece(Coord::plane(1, 2), Coord::plane(0, 2))
        .unwrap();
    assert_eq!(
        board.piece_at(Coord::plane(0, 2)),
        Some(piece(Color::Black, PieceKind::Queen))
    );
}

#[test]
fn pawn_capture_removes_the_victim() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(3, 4), piece(Color::White, PieceKind::Pawn));
    board.place_piece(Coord::plane(4, 5), piece(Color::Black, PieceKind::Knight));
    board
        .move_piece(Coord::plane(3, 4), Coord::plane(4, 5))
        .unwrap();
    assert_eq!(
        board.piece_at(Coord::plane(4, 5)),
        Some(piece(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.pieces().count(), 1);
}

#[test]
fn moving_king_or_rook_latches_castling_flags() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 0), piece(Color::White, PieceKind::King));
    board.place_piece(Coord::plane(7, 0), piece(Color::White, PieceKind::Rook));
    board.place_piece(Coord::plane(0, 0), piece(Color::White, PieceKind::Rook));
    // black needs replies to keep the turn alternating
    board.place_piece(Coord::plane(6, 6), piece(Color::Black, PieceKind::Pawn));
    board.place_piece(Coord::plane(6, 7), piece(Color::Black, PieceKind::Pawn));

    assert!(board.can_castle(Color::White, CastleSide::Kingside));
    assert!(board.can_castle(Color::White, CastleSide::Queenside));

    // shuffle the kingside rook away and back
    board
        .move_piece(Coord::plane(7, 0), Coord::plane(7, 1))
        .unwrap();
    board
        .move_piece(Coord::plane(6, 6), Coord::plane(5, 6))
        .unwrap();
    board
        .move_piece(Coord::plane(7, 1), Coord::plane(7, 0))
        .unwrap();
    board
        .move_piece(Coord::plane(6, 7), Coord::plane(5, 7))
        .unwrap();

    // the flag stays latched even though the rook is back home
    assert!(!board.can_castle(Color::White, CastleSide::Kingside));
    assert!(board.can_castle(Color::White, CastleSide::Queenside));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn pawn_delivers_check() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 4), piece(Color::Black, PieceKind::King));
    board.place_piece(Coord::plane(3, 3), piece(Color::White, PieceKind::Pawn));
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn aligned_rook_does_not_deliver_check() {
    // every non-pawn policy rejects occupied destinations, so a rook
    // aimed straight at the king is not a checker in this engine
    let mut board = Board::new();
    board.place_piece(Coord::plane(4, 4), piece(Color::Black, PieceKind::King));
    board.place_piece(Coord::plane(4, 0), piece(Color::White, PieceKind::Rook));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn missing_king_means_not_in_check() {
    let mut board = Board::new();
    board.place_piece(Coord::plane(3, 3), piece(Color::White, PieceKind::Pawn));
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}
