//! Generator configuration.

/// How a word being placed is checked against cells already claimed by
/// previously placed words.
///
/// Each step of a walk has a step index `k` (0 for the first letter). When
/// the walk reaches a cell that an earlier word claims, the two rules differ
/// in what the new letter `word[k]` is compared with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ConflictRule {
    /// Compare with the earlier word's letter at the same step index `k`.
    ///
    /// The crossing is accepted only if `earlier[k] == word[k]`, regardless
    /// of which of its own letters the earlier word actually wrote into the
    /// cell. Crossings where both words reach the cell at the same index
    /// (shared prefixes) behave as expected; other crossings may be rejected
    /// although the letters agree, or accepted and overwrite a letter of the
    /// earlier word. An earlier word left unreadable that way is reported as
    /// [`SkipReason::Overwritten`](crate::SkipReason::Overwritten).
    #[default]
    StepIndex,
    /// Compare with the letter the earlier word wrote into the cell.
    ///
    /// Every accepted crossing agrees letter for letter, so every placed word
    /// can always be read back from the board.
    CellLetter,
}

/// Parameters of a generation run.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::{ConflictRule, GeneratorConfig};
///
/// let config = GeneratorConfig {
///     width: 15,
///     height: 12,
///     conflict_rule: ConflictRule::CellLetter,
///     ..GeneratorConfig::default()
/// };
/// assert_eq!(config.resample_rounds, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// How crossings with earlier words are checked.
    pub conflict_rule: ConflictRule,
    /// How many boundary-biased start positions to try after the first,
    /// uniformly drawn start position admits no direction.
    pub resample_rounds: usize,
    /// Reject words longer than both dimensions up front instead of skipping
    /// them with a diagnostic.
    pub reject_oversized_words: bool,
}

impl GeneratorConfig {
    /// Default board width and height.
    pub const DEFAULT_SIZE: usize = 10;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            conflict_rule: ConflictRule::default(),
            resample_rounds: 1,
            reject_oversized_words: false,
        }
    }
}
