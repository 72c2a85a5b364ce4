//! Test sources — deterministic `UniformSource` implementations for tests.

use std::collections::VecDeque;

use seedling_core::rng::UniformSource;

/// A no-op source that always returns `0` from `next_below`, `0.0` from
/// `next_f64`, and zero bytes. Suitable for tests that do not depend on
/// specific random values; every sampler maps it onto the range minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl UniformSource for MockSource {
    fn next_below(&mut self, _bound: u64) -> u64 {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

/// A source that returns values from predetermined sequences. Panics if a
/// sequence is exhausted. Used in tests that need specific, repeatable
/// draws (e.g., pinning a word count or a version component).
///
/// Integer values are clamped to `bound - 1` so a script written for one
/// range never produces an out-of-range offset.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: VecDeque<u64>,
    floats: VecDeque<f64>,
    bytes: VecDeque<u8>,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given `next_below` values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values: values.into(),
            ..Self::default()
        }
    }

    /// Adds the values returned by `next_f64`.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats.into();
        self
    }

    /// Adds the bytes handed out by `fill_bytes`.
    #[must_use]
    pub fn with_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.bytes = bytes.into();
        self
    }

    /// Number of `next_below` values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl UniformSource for SequenceSource {
    fn next_below(&mut self, bound: u64) -> u64 {
        let value = self
            .values
            .pop_front()
            .expect("SequenceSource integer values exhausted");
        value.min(bound.saturating_sub(1))
    }

    fn next_f64(&mut self) -> f64 {
        self.floats
            .pop_front()
            .expect("SequenceSource float values exhausted")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for slot in dest {
            *slot = self
                .bytes
                .pop_front()
                .expect("SequenceSource bytes exhausted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_source_replays_values_in_order() {
        let mut source = SequenceSource::new(vec![3, 1, 4]);
        assert_eq!(source.next_below(10), 3);
        assert_eq!(source.next_below(10), 1);
        assert_eq!(source.next_below(10), 4);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_sequence_source_clamps_to_bound() {
        let mut source = SequenceSource::new(vec![99]);
        assert_eq!(source.next_below(5), 4);
    }

    #[test]
    fn test_sequence_source_hands_out_bytes() {
        let mut source = SequenceSource::new(vec![]).with_bytes(vec![1, 2, 3]);
        let mut buf = [0u8; 3];
        source.fill_bytes(&mut buf);
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_sequence_source_panics_when_exhausted() {
        let mut source = SequenceSource::new(vec![]);
        let _ = source.next_below(2);
    }
}
