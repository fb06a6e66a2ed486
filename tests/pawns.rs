use chess_moves::chess::moves::Move;
use chess_moves::chess::piece::{Color, Piece, PieceKind};
use chess_moves::core::board::Board;
use chess_moves::core::square::Square;
use chess_moves::game::Game;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn targets(moves: &[Move]) -> Vec<String> {
    moves.iter().map(|m| m.to.to_string()).collect()
}

#[test]
fn start_row_pawns_push_one_or_two() {
    let game = Game::new();
    assert_eq!(targets(&game.moves_for(sq("e2"))), ["e3", "e4"]);
    assert_eq!(targets(&game.moves_for(sq("c7"))), ["c6", "c5"]);
}

#[test]
fn pawn_off_start_row_pushes_one() {
    let board = Board::empty()
        .with(sq("e3"), Piece::white(PieceKind::Pawn))
        .with(sq("b6"), Piece::black(PieceKind::Pawn));
    let game = Game::from_board(board, Color::White);
    assert_eq!(targets(&game.moves_for(sq("e3"))), ["e4"]);
    assert_eq!(targets(&game.moves_for(sq("b6"))), ["b5"]);
}

#[test]
fn blocked_single_push_also_blocks_double_push() {
    let board = Board::empty()
        .with(sq("e2"), Piece::white(PieceKind::Pawn))
        .with(sq("e3"), Piece::black(PieceKind::Knight));
    let game = Game::from_board(board, Color::White);
    assert!(game.moves_for(sq("e2")).is_empty());
}

#[test]
fn occupied_double_push_square_is_excluded() {
    let board = Board::empty()
        .with(sq("d7"), Piece::black(PieceKind::Pawn))
        .with(sq("d5"), Piece::white(PieceKind::Pawn));
    let game = Game::from_board(board, Color::Black);
    assert_eq!(targets(&game.moves_for(sq("d7"))), ["d6"]);
}

#[test]
fn pawns_capture_diagonally_forward_only() {
    let board = Board::empty()
        .with(sq("e4"), Piece::white(PieceKind::Pawn))
        .with(sq("d5"), Piece::black(PieceKind::Knight))
        .with(sq("f5"), Piece::white(PieceKind::Knight))
        .with(sq("e5"), Piece::black(PieceKind::Pawn))
        .with(sq("d3"), Piece::black(PieceKind::Rook));
    let game = Game::from_board(board, Color::White);
    let moves = game.moves_for(sq("e4"));
    assert_eq!(targets(&moves), ["d5"]);
    assert_eq!(moves[0].captured, Some(Piece::black(PieceKind::Knight)));
    assert_eq!(moves[0].promotion, None);
}

#[test]
fn edge_file_pawn_captures_inward_only() {
    let board = Board::empty()
        .with(sq("a7"), Piece::black(PieceKind::Pawn))
        .with(sq("b6"), Piece::white(PieceKind::Bishop));
    let game = Game::from_board(board, Color::Black);
    assert_eq!(targets(&game.moves_for(sq("a7"))), ["a6", "a5", "b6"]);
}

#[test]
fn promotion_marker_iff_destination_is_last_row() {
    let board = Board::empty()
        .with(sq("e7"), Piece::white(PieceKind::Pawn))
        .with(sq("d8"), Piece::black(PieceKind::Rook))
        .with(sq("c3"), Piece::white(PieceKind::Pawn))
        .with(sq("g2"), Piece::black(PieceKind::Pawn))
        .with(sq("h1"), Piece::white(PieceKind::Rook));
    let game = Game::from_board(board, Color::White);

    for (from, piece) in game.board().pieces() {
        if piece.kind != PieceKind::Pawn {
            continue;
        }
        for mv in game.moves_for(from) {
            let last = mv.to.row() == piece.color.promotion_row();
            assert_eq!(mv.promotion.is_some(), last, "{mv}");
            if last {
                assert_eq!(mv.promotion, Some(PieceKind::Queen));
            }
        }
    }

    assert_eq!(targets(&game.moves_for(sq("e7"))), ["e8", "d8"]);
    assert_eq!(targets(&game.moves_for(sq("g2"))), ["g1", "h1"]);
}
