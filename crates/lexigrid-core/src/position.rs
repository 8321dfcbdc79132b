//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a board.
///
/// Positions are ordered row-major: first by `row`, then by `col`, so they
/// can key ordered maps directly.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::UpLeft), Some(Position::new(1, 2)));
/// assert_eq!(Position::new(0, 3).step(Direction::Up), None);
///
/// assert!(Position::new(0, 9) < Position::new(1, 0));
/// assert_eq!(pos.to_string(), "<2,3>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the neighbouring position one step along `dir`.
    ///
    /// Returns `None` when the step would move above row 0 or left of column 0.
    /// The caller is responsible for checking the lower and right edges.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let Some(row) = self.row.checked_add_signed(dr) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(dc) else {
            return None;
        };
        Some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.row, self.col)
    }
}
