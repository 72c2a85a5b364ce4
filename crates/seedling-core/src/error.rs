//! Sampling error types.

use std::fmt::Display;

use thiserror::Error;

/// Largest alphabet a single random byte can index without bias.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Top-level sampling error type.
///
/// Every variant describes a contract violation at the call site or an
/// unavailable entropy source. None of them are transient; callers fix the
/// arguments instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// The lower bound of a range exceeds its upper bound.
    #[error("invalid range: min {min} exceeds max {max}")]
    RangeInvalid {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },

    /// A character pool has more distinct entries than one byte can index.
    #[error("alphabet too large: {size} distinct characters exceeds the limit of {limit}")]
    AlphabetTooLarge {
        /// Number of distinct characters supplied.
        size: usize,
        /// The maximum supported size.
        limit: usize,
    },

    /// A character pool has no entries.
    #[error("alphabet is empty")]
    AlphabetEmpty,

    /// A word-count bound falls below its floor.
    #[error("word count invalid: bounds {min}..={max} must both be at least {floor}")]
    WordCountInvalid {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
        /// Minimum allowed value for either bound.
        floor: usize,
    },

    /// A sentence-count bound falls below one.
    #[error("sentence count invalid: bounds {min}..={max} must both be at least 1")]
    SentenceCountInvalid {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
    },

    /// The paragraph count is zero.
    #[error("paragraph count invalid: {count} must be at least 1")]
    ParagraphCountInvalid {
        /// Requested paragraph count.
        count: usize,
    },

    /// Rejection sampling discarded too many consecutive bytes.
    #[error("rejection sampling gave up after {attempts} consecutive discards")]
    RejectionLimitExceeded {
        /// Number of consecutive discards observed.
        attempts: u32,
    },

    /// The secure byte source could not produce bytes.
    #[error("secure byte source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl SamplingError {
    /// Builds a `RangeInvalid` error from any pair of displayable bounds.
    pub fn range_invalid(min: impl Display, max: impl Display) -> Self {
        let err = Self::RangeInvalid {
            min: min.to_string(),
            max: max.to_string(),
        };
        tracing::debug!(error = %err, "rejected sampling range");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_invalid_renders_both_bounds() {
        let err = SamplingError::range_invalid(10, 3);
        assert_eq!(err.to_string(), "invalid range: min 10 exceeds max 3");
        assert_eq!(
            err,
            SamplingError::RangeInvalid {
                min: "10".to_owned(),
                max: "3".to_owned(),
            }
        );
    }

    #[test]
    fn test_alphabet_too_large_message() {
        let err = SamplingError::AlphabetTooLarge {
            size: 300,
            limit: MAX_ALPHABET_SIZE,
        };
        assert_eq!(
            err.to_string(),
            "alphabet too large: 300 distinct characters exceeds the limit of 256"
        );
    }

    #[test]
    fn test_word_count_invalid_message() {
        let err = SamplingError::WordCountInvalid {
            min: 2,
            max: 5,
            floor: 3,
        };
        assert_eq!(
            err.to_string(),
            "word count invalid: bounds 2..=5 must both be at least 3"
        );
    }

    #[test]
    fn test_paragraph_count_invalid_message() {
        let err = SamplingError::ParagraphCountInvalid { count: 0 };
        assert_eq!(err.to_string(), "paragraph count invalid: 0 must be at least 1");
    }
}
