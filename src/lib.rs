//! Pseudo-legal chess move generation and naive move application on an 8x8 board.
//!
//! The engine tracks a board and the side to move. It generates, per piece, the moves its
//! movement pattern allows without regard to king safety, and applies moves without any
//! legality check. Castling, en passant and check detection are out of scope.

pub mod chess;
pub mod core;
pub mod error;
pub mod game;
