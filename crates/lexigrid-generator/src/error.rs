use lexigrid_core::WordError;

/// Errors raised while validating generator input.
///
/// All of these are detected before any random number is drawn, so a failed
/// call never produces a partial puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The board has zero width or zero height.
    #[display("invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// No words were given.
    #[display("word list is empty")]
    EmptyWordList,
    /// A word in the input list could not be parsed.
    #[display("invalid word at index {index}")]
    InvalidWord {
        /// Position of the word in the input list.
        index: usize,
        /// Why the word was rejected.
        source: WordError,
    },
    /// A word is longer than both board dimensions and can never fit.
    ///
    /// Only raised when [`GeneratorConfig::reject_oversized_words`] is set;
    /// otherwise such words are skipped with a diagnostic.
    ///
    /// [`GeneratorConfig::reject_oversized_words`]: crate::GeneratorConfig::reject_oversized_words
    #[display("word {word:?} ({len} letters) does not fit a {width}x{height} board")]
    WordTooLong {
        /// The oversized word.
        word: String,
        /// Number of letters in the word.
        len: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },
}
