//! Board primitives.
//!
//! - [`coord`]: signed (column, row) offsets and the king-step table.
//! - [`square`]: in-range squares and their two-character names (`"e4"`).
//! - [`board`]: the 8x8 grid of optional pieces.

pub mod board;
pub mod coord;
pub mod square;
