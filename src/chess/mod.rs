//! Chess rules on the standard 8x8 board: pieces, the starting layout, pseudo-legal
//! move generation and the (stubbed) game-end queries.

pub mod config;
pub mod layout;
pub mod moves;
pub mod piece;
pub mod rules;
pub mod status;
