use std::fmt;
use std::str::FromStr;

use crate::core::coord::Coord;
use crate::error::SquareParseError;

/// A square on the 8x8 board.
///
/// Column 0..7 is file a..h; row 0 is rank 8 and row 7 is rank 1 (White's back rank).
/// Both are always in range: a `Square` can only be built through checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` unless `col` and `row` are both in 0..8.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Square> {
        if col < 8 && row < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn from_coord(c: Coord) -> Option<Square> {
        if c.on_board() {
            Some(Square {
                row: c.y as u8,
                col: c.x as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.col as i8, self.row as i8)
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn shifted(self, delta: Coord) -> Option<Square> {
        Square::from_coord(self.coord() + delta)
    }

    /// File letter, 'a'..='h'.
    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, '1'..='8'.
    pub fn rank(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares, a8..h8 first and h1 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::Length(s.to_string()));
        };
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareParseError::Rank(rank));
        }
        Ok(Square {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}

impl TryFrom<&str> for Square {
    type Error = SquareParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
