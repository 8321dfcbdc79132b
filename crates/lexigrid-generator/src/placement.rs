//! Word placement with conflict detection and direction backtracking.
//!
//! A word is placed by walking from its start cell along a randomly chosen
//! direction, one cell per letter. The walk is built in a scratch path and
//! checked against the [`PlacementCache`] of previously committed words;
//! only a walk that completes without conflict is committed to the board and
//! the cache. A conflicting walk is discarded and another direction is tried
//! until none remain.

use std::{collections::BTreeMap, rc::Rc};

use lexigrid_core::{Board, Direction, DirectionSet, Letter, Position, Word};
use rand::RngExt;

use crate::ConflictRule;

/// Map from board cell to the committed word that claims it.
///
/// Entries are only ever added by a successful placement and are never
/// removed; they are the basis for detecting conflicts with later words.
#[derive(Debug, Default, Clone)]
pub struct PlacementCache {
    claims: BTreeMap<Position, Rc<Word>>,
}

impl PlacementCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the word claiming `pos`, if any.
    #[must_use]
    pub fn claimant(&self, pos: Position) -> Option<&Word> {
        self.claims.get(&pos).map(Rc::as_ref)
    }

    /// Returns the number of claimed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns `true` if no cell is claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Returns the claimed cells in row-major order.
    pub fn claimed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.claims.keys().copied()
    }

    fn commit(&mut self, word: &Rc<Word>, path: &[Position]) {
        for &pos in path {
            self.claims.insert(pos, Rc::clone(word));
        }
    }
}

/// Result of [`PlacementEngine::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementOutcome {
    /// The word was written to the board along this direction.
    Placed(Direction),
    /// Every allowed direction ran into a conflict; nothing was written.
    Exhausted,
}

#[derive(Debug)]
enum Walk {
    Complete(Vec<Position>),
    Conflict { step: usize, pos: Position },
    OffBoard { step: usize },
}

/// Places words on a board, one at a time.
///
/// The engine owns the board and the placement cache for the whole
/// generation run. Each call to [`place`](Self::place) either writes one
/// complete word or leaves both untouched.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Board, Direction, DirectionSet, Letter, Position, Word};
/// use lexigrid_generator::{ConflictRule, PlacementEngine, PlacementOutcome};
/// use rand::SeedableRng as _;
///
/// let board = Board::filled(5, 5, Letter::from_char('x').unwrap());
/// let mut engine = PlacementEngine::new(board, ConflictRule::StepIndex);
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
///
/// let cat: Word = "cat".parse()?;
/// let outcome = engine.place(&cat, Position::new(0, 0), DirectionSet::RIGHT, &mut rng);
/// assert_eq!(outcome, PlacementOutcome::Placed(Direction::Right));
/// assert_eq!(engine.board().to_string().lines().next(), Some("c a t x x"));
/// # Ok::<(), lexigrid_core::WordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    board: Board,
    cache: PlacementCache,
    rule: ConflictRule,
}

impl PlacementEngine {
    /// Creates an engine that places words onto `board`.
    #[must_use]
    pub fn new(board: Board, rule: ConflictRule) -> Self {
        Self {
            board,
            cache: PlacementCache::new(),
            rule,
        }
    }

    /// Returns the board in its current state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cache of committed placements.
    #[must_use]
    pub fn cache(&self) -> &PlacementCache {
        &self.cache
    }

    /// Consumes the engine, returning the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Tries to place `word` starting at `start`, along one of `allowed`.
    ///
    /// Directions are picked uniformly at random from those not yet tried.
    /// A direction is dropped as soon as its walk hits a conflict, and the
    /// next walk restarts from `start`. At most one walk per allowed
    /// direction is made.
    pub fn place<R>(
        &mut self,
        word: &Word,
        start: Position,
        allowed: DirectionSet,
        rng: &mut R,
    ) -> PlacementOutcome
    where
        R: RngExt + ?Sized,
    {
        let mut remaining = allowed;
        while let Some(dir) = remaining.pick_random(rng) {
            match self.walk(word, start, dir) {
                Walk::Complete(path) => {
                    self.commit(word, &path);
                    log::debug!("placed \"{word}\" at {start} going {dir}");
                    return PlacementOutcome::Placed(dir);
                }
                Walk::Conflict { step, pos } => {
                    log::debug!(
                        "\"{word}\" from {start} going {dir} conflicts at {pos} (letter {step})"
                    );
                }
                Walk::OffBoard { step } => {
                    log::debug!("\"{word}\" from {start} going {dir} leaves the board at letter {step}");
                }
            }
            remaining.remove_direction(dir);
        }
        PlacementOutcome::Exhausted
    }

    fn walk(&self, word: &Word, start: Position, dir: Direction) -> Walk {
        let mut path = Vec::with_capacity(word.len());
        let mut next = Some(start);
        for (step, &letter) in word.letters().iter().enumerate() {
            let Some(pos) = next.filter(|&pos| self.board.contains(pos)) else {
                return Walk::OffBoard { step };
            };
            if self.conflicts(word, step, letter, pos) {
                return Walk::Conflict { step, pos };
            }
            path.push(pos);
            next = pos.step(dir);
        }
        Walk::Complete(path)
    }

    fn conflicts(&self, word: &Word, step: usize, letter: Letter, pos: Position) -> bool {
        let Some(claimant) = self.cache.claimant(pos) else {
            return false;
        };
        match self.rule {
            ConflictRule::StepIndex => claimant != word && claimant.get(step) != Some(letter),
            ConflictRule::CellLetter => self.board[pos] != letter,
        }
    }

    fn commit(&mut self, word: &Word, path: &[Position]) {
        for (&pos, &letter) in path.iter().zip(word.letters()) {
            self.board[pos] = letter;
        }
        self.cache.commit(&Rc::new(word.clone()), path);
    }
}
