//! Letter representation.

use std::fmt::{self, Display};

/// A lowercase ASCII letter in the range `a`-`z`.
///
/// Puzzle boards and words are made exclusively of letters, so the invariant
/// is checked once at construction and never again.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'q');
/// assert_eq!(letter.index(), 16);
///
/// assert!(Letter::from_char('Q').is_none());
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters.
    pub const COUNT: usize = 26;

    /// Array containing all letters from `a` to `z`.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'a'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'a' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a character, returning `None` unless it is in `a`-`z`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    /// Creates a letter from its alphabet index (0 for `a`, 25 for `z`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 26 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "letter index out of range");
        Self::ALL[index]
    }

    /// Returns the alphabet index of this letter (0-25).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Returns the letter as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ch)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::ALL[0].as_char(), 'a');
        assert_eq!(Letter::ALL[25].as_char(), 'z');

        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), letter);
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }

        assert_eq!(format!("{}", Letter::ALL[2]), "c");
        let ch: char = Letter::ALL[3].into();
        assert_eq!(ch, 'd');
    }

    #[test]
    fn test_rejects_non_lowercase() {
        for ch in ['A', 'Z', '0', ' ', 'é', '-'] {
            assert_eq!(Letter::from_char(ch), None);
            assert_eq!(Letter::try_from(ch), Err(ch));
        }
    }

    #[test]
    #[should_panic(expected = "letter index out of range")]
    fn test_from_index_out_of_range_panics() {
        let _ = Letter::from_index(26);
    }
}
