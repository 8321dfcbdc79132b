//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by puzzle generation and
//! rendering. None of them draw randomness on their own, except
//! [`DirectionSet::pick_random`], which takes the random source explicitly.
//!
//! # Overview
//!
//! - [`letter`]: Type-safe representation of the lowercase letters `a`-`z`
//! - [`word`]: A validated, non-empty sequence of letters
//! - [`position`]: Grid coordinates `(row, col)` in row-major order
//! - [`direction`]: The 8 straight directions and sets of them
//! - [`board`]: The rectangular letter grid
//!
//! # Examples
//!
//! ```
//! use lexigrid_core::{Board, Direction, Letter, Position, Word};
//!
//! let word: Word = "cat".parse()?;
//! let mut board = Board::filled(5, 5, Letter::from_char('x').unwrap());
//!
//! // Write the word downwards from the top-left corner.
//! let mut pos = Position::new(0, 0);
//! for &letter in word.letters() {
//!     board[pos] = letter;
//!     pos = pos.step(Direction::Down).unwrap();
//! }
//!
//! let run = board.read_run(Position::new(0, 0), Direction::Down, word.len());
//! assert_eq!(run.as_deref(), Some(word.letters()));
//! # Ok::<(), lexigrid_core::WordError>(())
//! ```

pub mod board;
pub mod direction;
pub mod letter;
pub mod position;
pub mod word;

// Re-export commonly used types
pub use self::{
    board::Board,
    direction::{Direction, DirectionSet},
    letter::Letter,
    position::Position,
    word::{Word, WordError},
};
