use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::Square;

/// Back-rank order from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding `color`'s back rank.
#[inline]
pub fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// The 32 pieces of the standard starting position.
///
/// Pawns stand on each side's pawn start row, the back rank follows [`BACK_RANK`].
pub fn initial_placement() -> Vec<(Square, Piece)> {
    let mut out = Vec::with_capacity(32);
    for color in [Color::Black, Color::White] {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            if let Some(sq) = Square::new(col as u8, back_row(color)) {
                out.push((sq, Piece::new(kind, color)));
            }
            if let Some(sq) = Square::new(col as u8, color.pawn_start_row()) {
                out.push((sq, Piece::new(PieceKind::Pawn, color)));
            }
        }
    }
    out
}
