use log::trace;

use crate::chess::moves::Move;
use crate::chess::piece::{Piece, PieceKind, KNIGHT_DELTAS};
use crate::core::board::Board;
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::square::Square;

/// Pseudo-legal move generation on the 8x8 board.
///
/// Moves never land on a same-color piece, but nothing checks king safety: a king may step
/// into an attacked square and pinned pieces move freely. No castling, no en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Piece kind a pawn is marked to promote to on its last row.
    pub promotion: PieceKind,
}

impl Default for Rules {
    fn default() -> Self {
        Rules::new(PieceKind::Queen)
    }
}

impl Rules {
    pub fn new(promotion: PieceKind) -> Self {
        assert!(
            !matches!(promotion, PieceKind::Pawn | PieceKind::King),
            "cannot promote to {promotion:?}"
        );
        Self { promotion }
    }

    /// All pseudo-legal moves of the piece on `from`, empty if the square is empty.
    ///
    /// Whose turn it is plays no role here.
    pub fn moves_for(&self, board: &Board, from: Square) -> Vec<Move> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };
        let moves = match piece.kind {
            PieceKind::Pawn => self.pawn_moves(board, from, piece),
            PieceKind::Knight => self.knight_moves(board, from, piece),
            PieceKind::Bishop => self.bishop_moves(board, from, piece),
            PieceKind::Rook => self.rook_moves(board, from, piece),
            PieceKind::Queen => self.queen_moves(board, from, piece),
            PieceKind::King => self.king_moves(board, from, piece),
        };
        trace!("{} {:?} on {from}: {} moves", piece.color, piece.kind, moves.len());
        moves
    }

    pub fn pawn_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        let dir = piece.color.pawn_dir();
        let end_row = piece.color.promotion_row();
        let promotion = |to: Square| (to.row() == end_row).then_some(self.promotion);

        let mut out = Vec::new();

        // Already on the last row: no forward cell.
        let Some(one) = from.shifted(Coord::new(0, dir)) else {
            return out;
        };

        if board.is_empty(one) {
            out.push(Move {
                from,
                to: one,
                piece,
                captured: None,
                promotion: promotion(one),
            });

            // Only reachable when the single push was open.
            if from.row() == piece.color.pawn_start_row() {
                if let Some(two) = one.shifted(Coord::new(0, dir)).filter(|&sq| board.is_empty(sq)) {
                    out.push(Move {
                        from,
                        to: two,
                        piece,
                        captured: None,
                        promotion: promotion(two),
                    });
                }
            }
        }

        for dx in [-1, 1] {
            let Some(to) = from.shifted(Coord::new(dx, dir)) else {
                continue;
            };
            if let Some(target) = board.get(to).filter(|t| t.color != piece.color) {
                out.push(Move {
                    from,
                    to,
                    piece,
                    captured: Some(target),
                    promotion: promotion(to),
                });
            }
        }

        out
    }

    pub fn knight_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        leaper_moves(board, from, piece, &KNIGHT_DELTAS)
    }

    pub fn bishop_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        rider_moves(board, from, piece, PieceKind::Bishop.slide_dirs())
    }

    pub fn rook_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        rider_moves(board, from, piece, PieceKind::Rook.slide_dirs())
    }

    /// Rook moves followed by bishop moves. The two ray sets are disjoint.
    pub fn queen_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        let mut out = self.rook_moves(board, from, piece);
        out.extend(self.bishop_moves(board, from, piece));
        out
    }

    pub fn king_moves(&self, board: &Board, from: Square, piece: Piece) -> Vec<Move> {
        leaper_moves(board, from, piece, &KING_STEPS)
    }
}

/// One-step pieces: each delta lands on an empty square or captures.
fn leaper_moves(board: &Board, from: Square, piece: Piece, deltas: &[Coord]) -> Vec<Move> {
    deltas
        .iter()
        .filter_map(|&d| from.shifted(d))
        .filter_map(|to| match board.get(to) {
            Some(target) if target.color == piece.color => None,
            captured => Some(Move {
                from,
                to,
                piece,
                captured,
                promotion: None,
            }),
        })
        .collect()
}

/// Ray scan: walk each direction until the edge, stopping before an own piece and
/// on (capturing) an enemy piece.
fn rider_moves(board: &Board, from: Square, piece: Piece, dirs: &[Coord]) -> Vec<Move> {
    let mut out = Vec::new();
    for &dir in dirs {
        let mut cur = from.shifted(dir);
        while let Some(to) = cur {
            match board.get(to) {
                None => out.push(Move {
                    from,
                    to,
                    piece,
                    captured: None,
                    promotion: None,
                }),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move {
                            from,
                            to,
                            piece,
                            captured: Some(target),
                            promotion: None,
                        });
                    }
                    break;
                }
            }
            cur = to.shifted(dir);
        }
    }
    out
}
