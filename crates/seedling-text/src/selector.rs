//! Unbiased character selection and string sampling.
//!
//! A byte has 256 values, which only divides evenly into alphabets whose
//! size is a power of two. Mapping `byte % k` directly would favour the first
//! `256 mod k` characters, so bytes at or above the largest multiple of `k`
//! are discarded and a fresh byte is drawn in their place.

use seedling_core::error::SamplingError;
use seedling_core::range::Range;
use seedling_core::rng::{SecureByteSource, UniformSource};
use seedling_sampling::numeric::count;
use tracing::instrument;

use crate::alphabet::Alphabet;

/// Default number of consecutive discarded bytes tolerated before giving up.
pub const DEFAULT_REJECTION_LIMIT: u32 = 64;

/// Upper bound on bytes requested from the secure source per fill.
const MAX_BATCH: usize = 1024;

/// Maps secure random bytes onto an alphabet with exactly uniform
/// probability.
#[derive(Debug, Clone)]
pub struct UnbiasedSelector<'a> {
    alphabet: &'a Alphabet,
    threshold: usize,
    max_rejections: u32,
}

impl<'a> UnbiasedSelector<'a> {
    /// Creates a selector over `alphabet` with the default rejection limit.
    #[must_use]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        let size = alphabet.len();
        Self {
            alphabet,
            threshold: 256 - (256 % size),
            max_rejections: DEFAULT_REJECTION_LIMIT,
        }
    }

    /// Overrides the number of consecutive discards tolerated.
    #[must_use]
    pub fn with_rejection_limit(mut self, max_rejections: u32) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    /// The smallest byte value that is discarded.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Maps one byte to a character, or `None` if the byte must be discarded.
    #[must_use]
    pub fn accept(&self, byte: u8) -> Option<char> {
        let value = usize::from(byte);
        if value >= self.threshold {
            return None;
        }
        let chars = self.alphabet.as_slice();
        chars.get(value % chars.len()).copied()
    }

    /// Produces exactly `len` characters drawn from `secure`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EntropyUnavailable` if the source fails, or
    /// `SamplingError::RejectionLimitExceeded` if more than the configured
    /// number of consecutive bytes had to be discarded.
    pub fn sample(
        &self,
        secure: &mut dyn SecureByteSource,
        len: usize,
    ) -> Result<String, SamplingError> {
        let mut out = String::with_capacity(len);
        let mut produced = 0;
        let mut discards = 0u32;
        let mut batch = vec![0u8; batch_size(len)];

        while produced < len {
            let wanted = batch_size(len - produced);
            let bytes = &mut batch[..wanted];
            secure.try_fill(bytes)?;

            for &byte in bytes.iter() {
                let Some(c) = self.accept(byte) else {
                    discards += 1;
                    if discards > self.max_rejections {
                        tracing::warn!(
                            discards,
                            alphabet_size = self.alphabet.len(),
                            "secure byte source exceeded the rejection limit"
                        );
                        return Err(SamplingError::RejectionLimitExceeded { attempts: discards });
                    }
                    continue;
                };
                discards = 0;
                out.push(c);
                produced += 1;
                if produced == len {
                    break;
                }
            }
        }

        Ok(out)
    }
}

/// Requests a little more than needed so one fill usually suffices.
fn batch_size(remaining: usize) -> usize {
    (remaining + remaining / 4 + 8).min(MAX_BATCH)
}

/// Samples a string whose length is uniform in `lengths` and whose
/// characters come from `selector`.
///
/// The length is drawn from the uniform source; the characters from the
/// secure byte source.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` for reversed length bounds, plus any
/// error from [`UnbiasedSelector::sample`].
#[instrument(level = "trace", skip(rng, secure, selector))]
pub fn string(
    rng: &mut dyn UniformSource,
    secure: &mut dyn SecureByteSource,
    lengths: Range<usize>,
    selector: &UnbiasedSelector<'_>,
) -> Result<String, SamplingError> {
    let len = count(rng, lengths)?;
    selector.sample(secure, len)
}
