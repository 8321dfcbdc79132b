//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a non-hex character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed from which a whole puzzle is generated.
///
/// The same seed, configuration and word list always produce the same
/// puzzle. Seeds print as 64 lowercase hex digits and parse back from the
/// same form.
///
/// # Examples
///
/// ```
/// use lexigrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("sunday paper");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), lexigrid_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random source for one generation run.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ch) = s.chars().find(|ch| !ch.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit { ch });
        }
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("checked by caller"),
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed = PuzzleSeed::from_str(SEED).unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);

        let upper = PuzzleSeed::from_str(&SEED.to_uppercase()).unwrap();
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PuzzleSeed::from_str("abc"),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            PuzzleSeed::from_str(&format!("{}g", &SEED[1..])),
            Err(SeedParseError::InvalidDigit { ch: 'g' })
        );
        assert_eq!(
            PuzzleSeed::from_str(&format!("{}é", &SEED[2..])),
            Err(SeedParseError::InvalidDigit { ch: 'é' })
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        let a = PuzzleSeed::from_phrase("hello");
        let b = PuzzleSeed::from_phrase("hello");
        let c = PuzzleSeed::from_phrase("hello!");
        assert_eq!(a, b);
        assert_ne!(a, c);
        // SHA-256("hello")
        assert_eq!(
            a.to_string(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_rng_is_reproducible() {
        let seed = PuzzleSeed::from_str(SEED).unwrap();
        let mut rng1 = seed.rng();
        let mut rng2 = seed.rng();
        let a: Vec<u32> = (0..8).map(|_| rng1.random()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.random()).collect();
        assert_eq!(a, b);

        let mut other = PuzzleSeed::from_phrase("other").rng();
        let c: Vec<u32> = (0..8).map(|_| other.random()).collect();
        assert_ne!(a, c);
    }
}
