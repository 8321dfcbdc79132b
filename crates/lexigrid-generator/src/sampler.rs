//! Start-position sampling.

use lexigrid_core::{DirectionSet, Position};
use rand::RngExt;

use crate::allowed_directions;

/// Result of [`PositionSampler::choose_start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StartChoice {
    /// A start position with at least one direction that fits.
    Feasible {
        /// Where the word starts.
        start: Position,
        /// Directions along which the word stays on the board (non-empty).
        directions: DirectionSet,
    },
    /// Every sampled start position was infeasible.
    Infeasible {
        /// The last start position tried.
        start: Position,
    },
}

/// Chooses start positions for words on a `width × height` board.
///
/// The first candidate is drawn uniformly over the board. If no direction
/// fits from there, further candidates are drawn with coordinates pushed
/// towards the edges, where a word has room to run inwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSampler {
    width: usize,
    height: usize,
}

impl PositionSampler {
    /// Creates a sampler for a `width × height` board.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must not be empty");
        Self { width, height }
    }

    /// Draws a start position uniformly over the board.
    pub fn sample_start<R>(&self, rng: &mut R) -> Position
    where
        R: RngExt + ?Sized,
    {
        let row = rng.random_range(0..self.height);
        let col = rng.random_range(0..self.width);
        Position::new(row, col)
    }

    /// Draws a boundary-biased start position for a word of `word_len` letters.
    ///
    /// Three candidates are built and one of them is picked uniformly:
    /// a random row with a restricted column, a restricted row with a random
    /// column, and both coordinates restricted. See [`restricted_coordinate`]
    /// for how a restricted coordinate is drawn.
    pub fn sample_near_bounds<R>(&self, word_len: usize, rng: &mut R) -> Position
    where
        R: RngExt + ?Sized,
    {
        let row = restricted_coordinate(self.height, word_len, rng);
        let col = restricted_coordinate(self.width, word_len, rng);
        let candidates = [
            Position::new(rng.random_range(0..self.height), col),
            Position::new(row, rng.random_range(0..self.width)),
            Position::new(row, col),
        ];
        candidates[rng.random_range(0..candidates.len())]
    }

    /// Chooses a start position for a word of `word_len` letters.
    ///
    /// Tries one uniform position, then up to `resample_rounds`
    /// boundary-biased positions, stopping at the first one that admits a
    /// direction.
    pub fn choose_start<R>(&self, word_len: usize, resample_rounds: usize, rng: &mut R) -> StartChoice
    where
        R: RngExt + ?Sized,
    {
        let mut start = self.sample_start(rng);
        let mut directions = self.allowed_directions(word_len, start);

        let mut round = 0;
        while directions.is_empty() && round < resample_rounds {
            round += 1;
            let retry = self.sample_near_bounds(word_len, rng);
            log::trace!("no direction fits from {start}, resampling at {retry} (round {round})");
            start = retry;
            directions = self.allowed_directions(word_len, start);
        }

        if directions.is_empty() {
            StartChoice::Infeasible { start }
        } else {
            StartChoice::Feasible { start, directions }
        }
    }

    fn allowed_directions(&self, word_len: usize, start: Position) -> DirectionSet {
        allowed_directions(word_len, start, self.width, self.height)
    }
}

/// Draws one coordinate in `0..extent` biased towards leaving room for a word.
///
/// Picks one of the two sub-ranges `0..extent - word_len` (room to run
/// forwards) and `word_len - 1..extent - 1` (room to run backwards) at
/// random. If the picked sub-range is empty the other one is used, and if
/// both are empty the coordinate is drawn from the whole extent.
///
/// # Panics
///
/// Panics if `extent` is zero.
pub fn restricted_coordinate<R>(extent: usize, word_len: usize, rng: &mut R) -> usize
where
    R: RngExt + ?Sized,
{
    assert!(extent > 0, "extent must not be zero");
    let low = 0..extent.saturating_sub(word_len);
    let high = word_len.saturating_sub(1)..extent.saturating_sub(1);
    let (first, second) = if rng.random_bool(0.5) {
        (low, high)
    } else {
        (high, low)
    };
    if !first.is_empty() {
        rng.random_range(first)
    } else if !second.is_empty() {
        rng.random_range(second)
    } else {
        rng.random_range(0..extent)
    }
}
