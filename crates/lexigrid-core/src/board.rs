//! The letter grid of a word-search puzzle.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{Direction, Letter, Position};

/// A `width × height` grid of letters, stored row-major.
///
/// Every cell always holds a letter; there is no notion of an empty cell.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Board, Direction, Letter, Position};
///
/// let a = Letter::from_char('a').unwrap();
/// let b = Letter::from_char('b').unwrap();
///
/// let mut board = Board::filled(3, 2, a);
/// board[Position::new(1, 2)] = b;
///
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.get(Position::new(1, 2)), Some(b));
/// assert_eq!(board.get(Position::new(2, 0)), None);
/// assert_eq!(board.to_string(), "a a a\na a b\n");
/// assert_eq!(
///     board.read_run(Position::new(0, 1), Direction::DownRight, 2),
///     Some(vec![a, b])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Letter>,
}

impl Board {
    /// Creates a board with every cell set to `letter`.
    #[must_use]
    pub fn filled(width: usize, height: usize, letter: Letter) -> Self {
        Self {
            width,
            height,
            cells: vec![letter; width * height],
        }
    }

    /// Creates a board by calling `f` once per cell, in row-major order.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> Letter) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns the letter at `pos`, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.cell_index(pos).map(|i| self.cells[i])
    }

    /// Returns an iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        // `chunks` panics on a zero chunk size; a zero-width board has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Reads `len` letters starting at `start` and stepping along `dir`.
    ///
    /// Returns `None` if any of the cells lies off the board.
    #[must_use]
    pub fn read_run(&self, start: Position, dir: Direction, len: usize) -> Option<Vec<Letter>> {
        let mut letters = Vec::with_capacity(len);
        let mut pos = Some(start);
        for _ in 0..len {
            let current = pos?;
            letters.push(self.get(current)?);
            pos = current.step(dir);
        }
        Some(letters)
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row() * self.width + pos.col())
    }
}

impl Index<Position> for Board {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        let Some(i) = self.cell_index(pos) else {
            panic!("position {pos} is outside a {}x{} board", self.width, self.height);
        };
        &self.cells[i]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let Some(i) = self.cell_index(pos) else {
            panic!("position {pos} is outside a {}x{} board", self.width, self.height);
        };
        &mut self.cells[i]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, letter) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(letter, f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
