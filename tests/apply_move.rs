use chess_moves::chess::moves::MoveRequest;
use chess_moves::chess::piece::{Color, Piece, PieceKind};
use chess_moves::core::board::Board;
use chess_moves::core::square::Square;
use chess_moves::game::Game;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn req(from: &str, to: &str) -> MoveRequest {
    MoveRequest::new(sq(from), sq(to))
}

#[test]
fn e2_e4_from_initial_position() {
    let mut game = Game::new();
    let mv = game.apply_move(req("e2", "e4")).unwrap();

    assert_eq!(sq("e4").row(), 4);
    assert_eq!(mv.from, sq("e2"));
    assert_eq!(mv.to, sq("e4"));
    assert_eq!(mv.piece, Piece::white(PieceKind::Pawn));
    assert_eq!(mv.captured, None);
    assert_eq!(mv.promotion, None);
    assert_eq!(game.get(sq("e2")), None);
    assert_eq!(game.get(sq("e4")), Some(Piece::white(PieceKind::Pawn)));
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn source_emptied_destination_filled_and_capture_reported() {
    let mut game = Game::new();
    let before = game.board().clone();
    let mv = game.apply_move(req("d1", "d7")).unwrap();

    assert_eq!(mv.captured, before.get(sq("d7")));
    assert_eq!(mv.captured, Some(Piece::black(PieceKind::Pawn)));
    assert!(mv.is_capture());
    assert_eq!(game.get(sq("d1")), None);
    assert_eq!(game.get(sq("d7")), Some(Piece::white(PieceKind::Queen)));
    assert_eq!(game.board().piece_count(), 31);
}

#[test]
fn turn_alternates_once_per_applied_move() {
    let mut game = Game::new();
    let line = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")];
    let mut expected = Color::White;
    for (from, to) in line {
        assert_eq!(game.turn(), expected);
        assert!(game.apply_move(req(from, to)).is_some());
        expected = expected.other();
    }
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn empty_source_fails_without_side_effects() {
    let mut game = Game::new();
    let before = game.clone();
    assert_eq!(game.apply_move(req("e4", "e5")), None);
    assert_eq!(game, before);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn no_legality_check_is_made() {
    let mut game = Game::new();
    // black piece on white's turn, along a path no knight can take
    let mv = game.apply_move(req("b8", "b3")).unwrap();
    assert_eq!(mv.piece, Piece::black(PieceKind::Knight));
    assert_eq!(game.get(sq("b3")), Some(Piece::black(PieceKind::Knight)));
    assert_eq!(game.turn(), Color::Black);

    // onto an own piece: the occupant is reported as captured
    let mv = game.apply_move(req("a1", "b1")).unwrap();
    assert_eq!(mv.captured, Some(Piece::white(PieceKind::Knight)));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn white_pawn_e7_promotes_to_queen_on_e8() {
    let board = Board::empty()
        .with(sq("e7"), Piece::white(PieceKind::Pawn))
        .with(sq("a1"), Piece::white(PieceKind::King))
        .with(sq("h1"), Piece::black(PieceKind::King));
    let mut game = Game::from_board(board, Color::White);

    let generated = game
        .moves_for(sq("e7"))
        .into_iter()
        .find(|m| m.to == sq("e8"))
        .unwrap();
    assert_eq!(generated.promotion, Some(PieceKind::Queen));

    let mv = game.apply_move(generated.request()).unwrap();
    assert_eq!(mv.piece, Piece::white(PieceKind::Queen));
    assert_eq!(mv.promotion, Some(PieceKind::Queen));
    assert_eq!(game.get(sq("e8")), Some(Piece::white(PieceKind::Queen)));
    assert_eq!(game.get(sq("e7")), None);
}

#[test]
fn promotion_request_ignored_off_the_last_row_or_for_non_pawns() {
    let mut game = Game::new();
    let mv = game
        .apply_move(req("e2", "e4").with_promotion(PieceKind::Queen))
        .unwrap();
    assert_eq!(mv.piece.kind, PieceKind::Pawn);
    assert_eq!(mv.promotion, None);

    let board = Board::empty().with(sq("a7"), Piece::white(PieceKind::Rook));
    let mut game = Game::from_board(board, Color::White);
    let mv = game
        .apply_move(req("a7", "a8").with_promotion(PieceKind::Queen))
        .unwrap();
    assert_eq!(mv.piece.kind, PieceKind::Rook);
}

#[test]
fn black_pawn_promotes_on_row_seven_with_any_requested_kind() {
    let board = Board::empty().with(sq("c2"), Piece::black(PieceKind::Pawn));
    let mut game = Game::from_board(board, Color::Black);
    let mv = game
        .apply_move(req("c2", "c1").with_promotion(PieceKind::Knight))
        .unwrap();
    assert_eq!(game.get(sq("c1")), Some(Piece::black(PieceKind::Knight)));
    assert_eq!(mv.promotion, Some(PieceKind::Knight));
    assert_eq!(game.turn(), Color::White);
}
