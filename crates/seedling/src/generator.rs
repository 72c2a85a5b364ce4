//! The generator handle.

use std::fmt;
use std::net::Ipv4Addr;

use chrono::{DateTime, TimeDelta, Utc};
use seedling_core::clock::{Clock, SystemClock};
use seedling_core::error::SamplingError;
use seedling_core::range::Range;
use seedling_core::rng::{
    OsByteSource, SecureByteSource, SharedSource, StdRngSource, ThreadUniformSource,
    UniformSource,
};
use seedling_sampling::geo::Coordinate;
use seedling_sampling::version::Version;
use seedling_sampling::{choice, geo, identifier, network, numeric, temporal, version};
use seedling_text::alphabet::Alphabet;
use seedling_text::options::{ParagraphOptions, PhraseOptions, SentenceOptions};
use seedling_text::selector::{self, UnbiasedSelector};
use seedling_text::synth;
use uuid::Uuid;

use crate::config::GeneratorConfig;

/// Owns the random sources, clock and defaults every sampling call uses.
///
/// Methods without a `_with` suffix use the shapes from the
/// [`GeneratorConfig`]; the `_with` variants take explicit options.
pub struct Generator {
    uniform: Box<dyn UniformSource>,
    secure: Box<dyn SecureByteSource>,
    clock: Box<dyn Clock>,
    config: GeneratorConfig,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Creates a generator from explicit sources and configuration.
    #[must_use]
    pub fn new(
        uniform: Box<dyn UniformSource>,
        secure: Box<dyn SecureByteSource>,
        clock: Box<dyn Clock>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            uniform,
            secure,
            clock,
            config,
        }
    }

    /// A generator over the thread-local generator, the operating system's
    /// entropy pool and the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            Box::new(ThreadUniformSource),
            Box::new(OsByteSource),
            Box::new(SystemClock),
            GeneratorConfig::default(),
        )
    }

    /// A reproducible generator: both sources draw from one generator seeded
    /// with `seed`, so equal seeds give equal output sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let source = SharedSource::new(StdRngSource::seeded(seed));
        Self::new(
            Box::new(source.clone()),
            Box::new(source),
            Box::new(SystemClock),
            GeneratorConfig::default(),
        )
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the clock used by [`recent`](Self::recent) and
    /// [`soon`](Self::soon).
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // --- numbers ---

    /// Samples an `i32` from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
    pub fn integer(&mut self, range: Range<i32>) -> Result<i32, SamplingError> {
        numeric::integer(&mut *self.uniform, range)
    }

    /// Samples an `i64` from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
    pub fn wide_integer(&mut self, range: Range<i64>) -> Result<i64, SamplingError> {
        numeric::wide_integer(&mut *self.uniform, range)
    }

    /// Samples a `usize` from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
    pub fn count(&mut self, range: Range<usize>) -> Result<usize, SamplingError> {
        numeric::count(&mut *self.uniform, range)
    }

    /// Samples an `f64` from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` for reversed, NaN or infinite
    /// bounds.
    pub fn real(&mut self, range: Range<f64>) -> Result<f64, SamplingError> {
        numeric::real(&mut *self.uniform, range)
    }

    /// Samples a value from `range` with at most `places` decimal places.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` for reversed or non-finite
    /// bounds.
    pub fn decimal(&mut self, range: Range<f64>, places: u8) -> Result<f64, SamplingError> {
        numeric::decimal(&mut *self.uniform, range, places)
    }

    /// Returns `true` with probability `chance_percent / 100`.
    pub fn boolean(&mut self, chance_percent: f64) -> bool {
        numeric::boolean(&mut *self.uniform, chance_percent)
    }

    // --- time ---

    /// Samples a date-time from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
    pub fn datetime(
        &mut self,
        range: Range<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, SamplingError> {
        temporal::datetime(&mut *self.uniform, range)
    }

    /// Samples a duration from `range`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
    pub fn duration(&mut self, range: Range<TimeDelta>) -> Result<TimeDelta, SamplingError> {
        temporal::duration(&mut *self.uniform, range)
    }

    /// Samples a date-time up to `within` before now.
    ///
    /// # Errors
    ///
    /// Propagates date-time sampling errors.
    pub fn recent(&mut self, within: TimeDelta) -> Result<DateTime<Utc>, SamplingError> {
        temporal::recent(&mut *self.uniform, &*self.clock, within)
    }

    /// Samples a date-time up to `within` after now.
    ///
    /// # Errors
    ///
    /// Propagates date-time sampling errors.
    pub fn soon(&mut self, within: TimeDelta) -> Result<DateTime<Utc>, SamplingError> {
        temporal::soon(&mut *self.uniform, &*self.clock, within)
    }

    // --- versions ---

    /// Samples a version between two dotted bounds, using the configured
    /// ceilings for components the upper bound omits.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `min` parses greater than
    /// `max`.
    pub fn version(&mut self, min: &str, max: &str) -> Result<Version, SamplingError> {
        version::version(&mut *self.uniform, min, max, &self.config.version_ceilings)
    }

    /// Samples a version in `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `low > high`.
    pub fn version_between(
        &mut self,
        low: Version,
        high: Version,
    ) -> Result<Version, SamplingError> {
        version::version_between(&mut *self.uniform, low, high, &self.config.version_ceilings)
    }

    // --- strings and text ---

    /// Samples a string of the configured shape.
    ///
    /// # Errors
    ///
    /// See [`string_with`](Self::string_with).
    pub fn string(&mut self) -> Result<String, SamplingError> {
        let options = self.config.string;
        let alphabet = options.alphabet.alphabet();
        self.string_with(Range::new(options.min_len, options.max_len), &alphabet)
    }

    /// Samples a string whose length lies in `lengths` and whose characters
    /// come from `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` for reversed lengths,
    /// `SamplingError::EntropyUnavailable` if the secure source fails, or
    /// `SamplingError::RejectionLimitExceeded` if it keeps producing
    /// unusable bytes.
    pub fn string_with(
        &mut self,
        lengths: Range<usize>,
        alphabet: &Alphabet,
    ) -> Result<String, SamplingError> {
        let selector =
            UnbiasedSelector::new(alphabet).with_rejection_limit(self.config.rejection_limit.0);
        selector::string(&mut *self.uniform, &mut *self.secure, lengths, &selector)
    }

    /// Picks one lexicon word.
    pub fn word(&mut self, title_case: bool) -> String {
        synth::word(&mut *self.uniform, title_case)
    }

    /// Builds a phrase of the configured shape.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WordCountInvalid` if the configured bounds are
    /// below 2.
    pub fn phrase(&mut self) -> Result<String, SamplingError> {
        let options = self.config.phrase;
        self.phrase_with(&options)
    }

    /// Builds a phrase.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WordCountInvalid` if a bound is below 2.
    pub fn phrase_with(&mut self, options: &PhraseOptions) -> Result<String, SamplingError> {
        synth::phrase(&mut *self.uniform, options)
    }

    /// Builds a sentence of the configured shape.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WordCountInvalid` if the configured bounds are
    /// below 3.
    pub fn sentence(&mut self) -> Result<String, SamplingError> {
        let options = self.config.sentence;
        self.sentence_with(&options)
    }

    /// Builds a sentence.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WordCountInvalid` if a bound is below 3.
    pub fn sentence_with(&mut self, options: &SentenceOptions) -> Result<String, SamplingError> {
        synth::sentence(&mut *self.uniform, options)
    }

    /// Builds paragraphs of the configured shape.
    ///
    /// # Errors
    ///
    /// See [`paragraphs_with`](Self::paragraphs_with).
    pub fn paragraphs(&mut self) -> Result<String, SamplingError> {
        let options = self.config.paragraphs;
        self.paragraphs_with(&options)
    }

    /// Builds paragraphs.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::ParagraphCountInvalid`,
    /// `SamplingError::SentenceCountInvalid` or
    /// `SamplingError::WordCountInvalid` for out-of-range options.
    pub fn paragraphs_with(&mut self, options: &ParagraphOptions) -> Result<String, SamplingError> {
        synth::paragraphs(&mut *self.uniform, options)
    }

    // --- collections ---

    /// Picks one of `values` uniformly.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `values` is empty.
    pub fn enum_value<T: Clone>(&mut self, values: &[T]) -> Result<T, SamplingError> {
        choice::enum_value(&mut *self.uniform, values)
    }

    /// Picks an element of `items`, or `default` when absent or empty.
    pub fn pick<I: IntoIterator>(&mut self, items: Option<I>, default: I::Item) -> I::Item {
        choice::pick(&mut *self.uniform, items, default)
    }

    /// Borrows an element of `items`, or `None` when empty.
    pub fn pick_ref<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        choice::pick_ref(&mut *self.uniform, items)
    }

    // --- structured values ---

    /// Samples an IPv4 address.
    pub fn ipv4_address(&mut self) -> Ipv4Addr {
        network::ipv4_address(&mut *self.uniform)
    }

    /// Samples a latitude/longitude pair.
    pub fn coordinate(&mut self) -> Coordinate {
        geo::coordinate(&mut *self.uniform)
    }

    /// Samples a version-4 UUID.
    pub fn uuid(&mut self) -> Uuid {
        identifier::uuid(&mut *self.uniform)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedling_test_support::{FailingByteSource, FixedBytes, FixedClock, MockSource};

    fn scripted(config: GeneratorConfig) -> Generator {
        Generator::new(
            Box::new(MockSource),
            Box::new(FixedBytes::constant(0)),
            Box::new(FixedClock(DateTime::<Utc>::UNIX_EPOCH)),
            config,
        )
    }

    #[test]
    fn test_string_uses_configured_shape() {
        let mut config = GeneratorConfig::default();
        config.string.min_len = 3;
        config.string.max_len = 9;
        let value = scripted(config).string().unwrap();
        // MockSource draws the minimum length; byte 0 maps to the first character.
        assert_eq!(value, "AAA");
    }

    #[test]
    fn test_string_honours_configured_rejection_limit() {
        let mut config = GeneratorConfig::default();
        config.rejection_limit.0 = 2;
        let mut generator = Generator::new(
            Box::new(MockSource),
            Box::new(FixedBytes::constant(255)),
            Box::new(SystemClock),
            config,
        );
        assert_eq!(
            generator.string(),
            Err(SamplingError::RejectionLimitExceeded { attempts: 3 })
        );
    }

    #[test]
    fn test_string_surfaces_entropy_failure() {
        let mut generator = Generator::new(
            Box::new(MockSource),
            Box::new(FailingByteSource),
            Box::new(SystemClock),
            GeneratorConfig::default(),
        );
        assert!(matches!(
            generator.string(),
            Err(SamplingError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_version_uses_configured_ceilings() {
        let mut config = GeneratorConfig::default();
        config.version_ceilings.major = 3;
        let mut generator = Generator::seeded(11).with_config(config);
        for _ in 0..200 {
            assert!(generator.version("", "").unwrap().major <= 3);
        }
    }

    #[test]
    fn test_recent_uses_injected_clock() {
        let mut generator = scripted(GeneratorConfig::default());
        let value = generator.recent(TimeDelta::days(1)).unwrap();
        assert_eq!(value, DateTime::<Utc>::UNIX_EPOCH - TimeDelta::days(1));
    }

    #[test]
    fn test_debug_shows_config_only() {
        let rendered = format!("{:?}", Generator::system());
        assert!(rendered.starts_with("Generator { config:"));
        assert!(rendered.ends_with(".. }"));
    }
}
