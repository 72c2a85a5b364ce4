//! Test byte sources — deterministic `SecureByteSource` implementations.

use seedling_core::error::SamplingError;
use seedling_core::rng::SecureByteSource;

/// A byte source that cycles through a fixed pattern forever.
///
/// An empty pattern produces zero bytes.
#[derive(Debug, Clone)]
pub struct FixedBytes {
    pattern: Vec<u8>,
    position: usize,
}

impl FixedBytes {
    /// Create a source cycling through `pattern`.
    #[must_use]
    pub fn new(pattern: Vec<u8>) -> Self {
        Self {
            pattern,
            position: 0,
        }
    }

    /// Create a source that always yields `byte`.
    #[must_use]
    pub fn constant(byte: u8) -> Self {
        Self::new(vec![byte])
    }
}

impl SecureByteSource for FixedBytes {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), SamplingError> {
        if self.pattern.is_empty() {
            dest.fill(0);
            return Ok(());
        }
        for slot in dest {
            *slot = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
        Ok(())
    }
}

/// A byte source whose every fill fails with `EntropyUnavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingByteSource;

impl SecureByteSource for FailingByteSource {
    fn try_fill(&mut self, _dest: &mut [u8]) -> Result<(), SamplingError> {
        Err(SamplingError::EntropyUnavailable(
            "entropy source offline".to_owned(),
        ))
    }
}
