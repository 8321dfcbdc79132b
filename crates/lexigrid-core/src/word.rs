//! Words to be hidden in a puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// Errors returned when parsing a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The input contained no letters.
    #[display("word is empty")]
    Empty,
    /// The input contained a character outside `a`-`z`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidLetter {
        /// The offending character.
        ch: char,
        /// Character index of the offending character.
        index: usize,
    },
}

/// A non-empty sequence of lowercase letters.
///
/// Two words are equal when their text is equal.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{Word, WordError};
///
/// let word: Word = "cat".parse()?;
/// assert_eq!(word.len(), 3);
/// assert_eq!(word.to_string(), "cat");
/// assert_eq!(word.get(1).map(|l| l.as_char()), Some('a'));
/// assert_eq!(word.get(3), None);
///
/// assert_eq!("".parse::<Word>(), Err(WordError::Empty));
/// # Ok::<(), WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Box<[Letter]>,
}

impl Word {
    /// Creates a word from letters.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] if `letters` is empty.
    pub fn from_letters(letters: impl Into<Box<[Letter]>>) -> Result<Self, WordError> {
        let letters = letters.into();
        if letters.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self { letters })
    }

    /// Returns the number of letters in the word (always at least 1).
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns the letters of the word in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the letter at index `k`, or `None` past the end of the word.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<Letter> {
        self.letters.get(k).copied()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .chars()
            .enumerate()
            .map(|(index, ch)| Letter::from_char(ch).ok_or(WordError::InvalidLetter { ch, index }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(letters)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            Display::fmt(letter, f)?;
        }
        Ok(())
    }
}
