use std::fmt::{self, Display};

use lexigrid_core::{Board, Direction, Position, Word};
use rand::RngExt;

use crate::{
    GenerateError, GeneratorConfig, PlacementEngine, PlacementOutcome, PositionSampler,
    PuzzleSeed, StartChoice, filler,
};

/// A word that was embedded in the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word.
    pub word: Word,
    /// Cell holding the first letter.
    pub start: Position,
    /// Direction from the first letter to the last.
    pub direction: Direction,
}

impl PlacedWord {
    /// Returns the cells covered by the word, first letter first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(Some(self.start), |pos| pos.step(self.direction))
            .take(self.word.len())
    }

    /// Returns `true` if reading the board along this placement yields the word.
    #[must_use]
    pub fn reads_back(&self, board: &Board) -> bool {
        board
            .read_run(self.start, self.direction, self.word.len())
            .is_some_and(|letters| letters == self.word.letters())
    }
}

/// Why a word was left out of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SkipReason {
    /// No sampled start position left room for the word in any direction.
    #[display("no direction fits")]
    NoFittingDirection,
    /// Every direction that fitted conflicted with an earlier word.
    #[display("all directions conflict")]
    DirectionsExhausted,
    /// The word was placed, but a later word wrote over some of its letters.
    #[display("overwritten by a later word")]
    Overwritten,
}

/// A word that could not be placed, with the start position that failed.
///
/// Displays as the `<row,col>` diagnostic of the failing start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWord {
    /// The word.
    pub word: Word,
    /// The last start position tried, or the start of an overwritten placement.
    pub start: Position,
    /// Why the word was skipped.
    pub reason: SkipReason,
}

impl Display for SkippedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.start, f)
    }
}

/// A generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully populated letter grid.
    pub board: Board,
    /// Words embedded in the board, in input order.
    pub placed: Vec<PlacedWord>,
    /// Words that could not be placed, in input order.
    pub skipped: Vec<SkippedWord>,
    /// The seed the puzzle was generated from, if it came from a seed.
    pub seed: Option<PuzzleSeed>,
}

/// Word-search puzzle generator.
///
/// Words are placed strictly in input order. For each word a start position
/// is sampled, the directions that keep the word on the board are computed,
/// and the placement engine tries them until one completes without
/// conflict. A word that cannot be placed is skipped with a diagnostic; this
/// never stops generation.
///
/// Under [`ConflictRule::StepIndex`](crate::ConflictRule::StepIndex) a later
/// word may write over letters of an earlier one. Once every word has been
/// tried, placements that no longer read back from the board are moved to
/// [`GeneratedPuzzle::skipped`] as [`SkipReason::Overwritten`].
///
/// # Examples
///
/// ```
/// use lexigrid_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed, parse_words};
///
/// let words = parse_words(["cat", "dog", "bird"])?;
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
///
/// let seed = PuzzleSeed::from_phrase("example");
/// let puzzle = generator.generate_with_seed(&words, seed)?;
/// assert_eq!(puzzle.placed.len() + puzzle.skipped.len(), 3);
///
/// // The same seed reproduces the same puzzle.
/// assert_eq!(generator.generate_with_seed(&words, seed)?, puzzle);
/// # Ok::<(), lexigrid_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or word list is invalid.
    pub fn generate(&self, words: &[Word]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates a puzzle reproducibly from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or word list is invalid.
    pub fn generate_with_seed(
        &self,
        words: &[Word],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let mut puzzle = self.generate_with_rng(words, &mut rng)?;
        puzzle.seed = Some(seed);
        Ok(puzzle)
    }

    /// Generates a puzzle drawing all randomness from `rng`.
    ///
    /// The filler letters are drawn first, then the placement of each word.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or word list is invalid. No
    /// randomness is drawn in that case.
    pub fn generate_with_rng<R>(
        &self,
        words: &[Word],
        rng: &mut R,
    ) -> Result<GeneratedPuzzle, GenerateError>
    where
        R: RngExt + ?Sized,
    {
        self.validate(words)?;

        let GeneratorConfig {
            width,
            height,
            conflict_rule,
            resample_rounds,
            reject_oversized_words: _,
        } = self.config;

        let board = filler::generate_board(width, height, rng);
        let sampler = PositionSampler::new(width, height);
        let mut engine = PlacementEngine::new(board, conflict_rule);
        let mut outcomes = Vec::with_capacity(words.len());

        for word in words {
            let (start, reason) = match sampler.choose_start(word.len(), resample_rounds, rng) {
                StartChoice::Feasible { start, directions } => {
                    match engine.place(word, start, directions, rng) {
                        PlacementOutcome::Placed(direction) => {
                            outcomes.push(Ok(PlacedWord {
                                word: word.clone(),
                                start,
                                direction,
                            }));
                            continue;
                        }
                        PlacementOutcome::Exhausted => (start, SkipReason::DirectionsExhausted),
                    }
                }
                StartChoice::Infeasible { start } => (start, SkipReason::NoFittingDirection),
            };
            log::warn!("{start} could not place \"{word}\": {reason}");
            outcomes.push(Err(SkippedWord {
                word: word.clone(),
                start,
                reason,
            }));
        }

        let board = engine.into_board();
        let mut placed = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(word) if word.reads_back(&board) => placed.push(word),
                Ok(PlacedWord { word, start, .. }) => {
                    let reason = SkipReason::Overwritten;
                    log::warn!("{start} could not keep \"{word}\": {reason}");
                    skipped.push(SkippedWord {
                        word,
                        start,
                        reason,
                    });
                }
                Err(skip) => skipped.push(skip),
            }
        }

        log::info!(
            "generated {width}x{height} puzzle: {} placed, {} skipped",
            placed.len(),
            skipped.len()
        );

        Ok(GeneratedPuzzle {
            board,
            placed,
            skipped,
            seed: None,
        })
    }

    fn validate(&self, words: &[Word]) -> Result<(), GenerateError> {
        let GeneratorConfig {
            width,
            height,
            reject_oversized_words,
            ..
        } = self.config;

        if width == 0 || height == 0 {
            return Err(GenerateError::InvalidDimensions { width, height });
        }
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }
        if reject_oversized_words
            && let Some(word) = words.iter().find(|word| word.len() > width.max(height))
        {
            return Err(GenerateError::WordTooLong {
                word: word.to_string(),
                len: word.len(),
                width,
                height,
            });
        }
        Ok(())
    }
}

/// Parses a list of words.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidWord`] for the first word that is empty
/// or contains a character outside `a`-`z`.
pub fn parse_words<I>(words: I) -> Result<Vec<Word>, GenerateError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            word.as_ref()
                .parse()
                .map_err(|source| GenerateError::InvalidWord { index, source })
        })
        .collect()
}
