//! Word-search puzzle generation.
//!
//! This crate fills a board with random letters and hides a list of words
//! in it along straight lines, in any of the 8 directions.
//!
//! # Overview
//!
//! Generation is split into small, independently testable steps:
//!
//! - [`generate_board`]: fills the board with uniformly random letters
//! - [`allowed_directions`]: which directions keep a word on the board from
//!   a given start cell
//! - [`PositionSampler`]: picks start cells, falling back to
//!   boundary-biased candidates when the first pick admits no direction
//! - [`PlacementEngine`]: walks the board, detects conflicts with earlier
//!   words, backtracks across directions and commits successful walks
//! - [`PuzzleGenerator`]: runs the steps above for every word in order
//!
//! All randomness comes from a single generator passed in explicitly, or
//! created from a [`PuzzleSeed`], so puzzles are reproducible.
//!
//! # Examples
//!
//! ```
//! use lexigrid_generator::{GeneratorConfig, PuzzleGenerator, parse_words};
//!
//! let words = parse_words(["rust", "crate", "trait"])?;
//! let generator = PuzzleGenerator::new(GeneratorConfig {
//!     width: 12,
//!     height: 8,
//!     ..GeneratorConfig::default()
//! });
//! let puzzle = generator.generate(&words)?;
//!
//! assert_eq!(puzzle.board.width(), 12);
//! for skipped in &puzzle.skipped {
//!     eprintln!("{skipped}");
//! }
//! # Ok::<(), lexigrid_generator::GenerateError>(())
//! ```

pub use self::{
    config::*, error::*, feasibility::*, filler::*, generator::*, placement::*, sampler::*,
    seed::*,
};

mod config;
mod error;
mod feasibility;
mod filler;
mod generator;
mod placement;
mod sampler;
mod seed;
