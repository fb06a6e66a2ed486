//! Errors for the fallible boundaries: square names, configuration and the turn-gated
//! [`crate::game::Game::play`] path.
//!
//! The permissive engine operations do not use these; they answer with `Option` or an
//! empty move list instead.

use thiserror::Error;

use crate::chess::piece::{Color, PieceKind};
use crate::core::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square name must be a file letter followed by a rank digit, got {0:?}")]
    Length(String),

    #[error("invalid file {0:?} (expected a-h)")]
    File(char),

    #[error("invalid rank {0:?} (expected 1-8)")]
    Rank(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("unknown piece code {0:?} (expected one of p n b r q k)")]
    UnknownPieceCode(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Square(#[from] SquareParseError),

    #[error("no piece on {square}")]
    NoPiece { square: Square },

    #[error("{square} holds a {color} piece but it is {turn}'s turn")]
    WrongTurn {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[error("the piece on {from} cannot move to {to}")]
    IllegalMove { from: Square, to: Square },
}

pub type GameResult<T> = Result<T, GameError>;
