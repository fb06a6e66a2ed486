use std::fmt;

use crate::chess::piece::{Piece, PieceKind};
use crate::core::square::Square;

/// A generated or applied move.
///
/// Carries no legality guarantee beyond "does not land on a same-color piece".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The mover. For an applied promotion this is the promoted piece.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The request that would replay this move.
    pub fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " ={}", kind.code())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.symbol())?;
        }
        Ok(())
    }
}

/// Input to [`crate::game::Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

impl From<&Move> for MoveRequest {
    fn from(mv: &Move) -> Self {
        mv.request()
    }
}
