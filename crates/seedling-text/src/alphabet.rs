//! Character pools for string sampling.

use std::collections::HashSet;

use seedling_core::error::{MAX_ALPHABET_SIZE, SamplingError};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const HEX: &str = "0123456789abcdef";

/// Glyphs dropped from the `unambiguous` preset because they are easily
/// mistaken for one another when read back by a person.
const AMBIGUOUS: &str = "0Oo1lI";

/// A deduplicated pool of at most 256 characters.
///
/// Order of first appearance is kept so sampling with a scripted byte
/// source is reproducible, but membership is all that matters to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from any characters, dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::AlphabetTooLarge` if more than 256 distinct
    /// characters remain, or `SamplingError::AlphabetEmpty` if none do.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, SamplingError> {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for c in chars {
            // past the limit only the distinct count is still needed
            if seen.insert(c) && seen.len() <= MAX_ALPHABET_SIZE {
                distinct.push(c);
            }
        }

        if seen.is_empty() {
            return Err(SamplingError::AlphabetEmpty);
        }
        if seen.len() > MAX_ALPHABET_SIZE {
            return Err(SamplingError::AlphabetTooLarge {
                size: seen.len(),
                limit: MAX_ALPHABET_SIZE,
            });
        }
        Ok(Self { chars: distinct })
    }

    /// Letters and digits.
    #[must_use]
    pub fn general() -> Self {
        Self::preset([UPPER, LOWER, DIGITS].concat().chars())
    }

    /// Letters only.
    #[must_use]
    pub fn alpha() -> Self {
        Self::preset([UPPER, LOWER].concat().chars())
    }

    /// Letters and digits without visually confusable glyphs.
    #[must_use]
    pub fn unambiguous() -> Self {
        Self::preset(
            [UPPER, LOWER, DIGITS]
                .concat()
                .chars()
                .filter(|c| !AMBIGUOUS.contains(*c)),
        )
    }

    /// Decimal digits.
    #[must_use]
    pub fn digits() -> Self {
        Self::preset(DIGITS.chars())
    }

    /// Lowercase hexadecimal digits.
    #[must_use]
    pub fn hex() -> Self {
        Self::preset(HEX.chars())
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; construction rejects empty pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns `true` if `c` belongs to the pool.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The characters in order of first appearance.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    // Presets are built from fixed ASCII tables well under the size limit.
    fn preset(chars: impl Iterator<Item = char>) -> Self {
        Self {
            chars: chars.collect(),
        }
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = SamplingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.chars())
    }
}
