//! Game-end queries.
//!
//! Check, checkmate and stalemate detection is not implemented: every query reports
//! `false`, even for positions that are mate under full chess rules. Callers surface
//! end-of-game notices from these answers, so they must stay stubs until real
//! attack detection exists.

use crate::chess::piece::Color;
use crate::core::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// Not implemented; always `false`.
pub fn is_in_check(_board: &Board, _side: Color) -> bool {
    false
}

/// Not implemented; always `false`.
pub fn is_checkmate(_board: &Board, _side: Color) -> bool {
    false
}

/// Not implemented; always `false`.
pub fn is_stalemate(_board: &Board, _side: Color) -> bool {
    false
}

/// Summary for the side to move, checkmate taking precedence over stalemate over check.
pub fn status(board: &Board, side: Color) -> GameStatus {
    if is_checkmate(board, side) {
        GameStatus::Checkmate
    } else if is_stalemate(board, side) {
        GameStatus::Stalemate
    } else if is_in_check(board, side) {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}
