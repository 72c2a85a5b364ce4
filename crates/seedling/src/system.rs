//! One-shot sampling over the process-wide sources.
//!
//! Each function draws from `rand`'s thread-local generator (and the
//! operating system's entropy pool for strings) with default configuration.
//! Safe to call from any number of threads.

use std::net::Ipv4Addr;

use chrono::{DateTime, TimeDelta, Utc};
use seedling_core::clock::SystemClock;
use seedling_core::error::SamplingError;
use seedling_core::range::Range;
use seedling_core::rng::{OsByteSource, ThreadUniformSource};
use seedling_sampling::geo::Coordinate;
use seedling_sampling::version::{Version, VersionCeilings};
use seedling_sampling::{choice, geo, identifier, network, numeric, temporal, version};
use seedling_text::alphabet::Alphabet;
use seedling_text::options::{ParagraphOptions, PhraseOptions, SentenceOptions};
use seedling_text::selector::{self, UnbiasedSelector};
use seedling_text::synth;
use uuid::Uuid;

/// Samples an `i32` in `[min, max]`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `min > max`.
pub fn integer(min: i32, max: i32) -> Result<i32, SamplingError> {
    numeric::integer(&mut ThreadUniformSource, Range::new(min, max))
}

/// Samples an `i64` in `[min, max]`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `min > max`.
pub fn wide_integer(min: i64, max: i64) -> Result<i64, SamplingError> {
    numeric::wide_integer(&mut ThreadUniformSource, Range::new(min, max))
}

/// Samples an `f64` in `[min, max]`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` for reversed or non-finite bounds.
pub fn real(min: f64, max: f64) -> Result<f64, SamplingError> {
    numeric::real(&mut ThreadUniformSource, Range::new(min, max))
}

/// Samples a value in `[min, max]` with at most `places` decimal places.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` for reversed or non-finite bounds.
pub fn decimal(min: f64, max: f64, places: u8) -> Result<f64, SamplingError> {
    numeric::decimal(&mut ThreadUniformSource, Range::new(min, max), places)
}

/// Returns `true` with probability `chance_percent / 100`.
#[must_use]
pub fn boolean(chance_percent: f64) -> bool {
    numeric::boolean(&mut ThreadUniformSource, chance_percent)
}

/// Samples a date-time in `[start, end]`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `start > end`.
pub fn datetime(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<DateTime<Utc>, SamplingError> {
    temporal::datetime(&mut ThreadUniformSource, Range::new(start, end))
}

/// Samples a duration in `[min, max]`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `min > max`.
pub fn duration(min: TimeDelta, max: TimeDelta) -> Result<TimeDelta, SamplingError> {
    temporal::duration(&mut ThreadUniformSource, Range::new(min, max))
}

/// Samples a date-time up to `within` before now.
///
/// # Errors
///
/// Propagates date-time sampling errors.
pub fn recent(within: TimeDelta) -> Result<DateTime<Utc>, SamplingError> {
    temporal::recent(&mut ThreadUniformSource, &SystemClock, within)
}

/// Samples a date-time up to `within` after now.
///
/// # Errors
///
/// Propagates date-time sampling errors.
pub fn soon(within: TimeDelta) -> Result<DateTime<Utc>, SamplingError> {
    temporal::soon(&mut ThreadUniformSource, &SystemClock, within)
}

/// Samples a version between two dotted bounds with the default ceilings.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `min` parses greater than `max`.
pub fn version(min: &str, max: &str) -> Result<Version, SamplingError> {
    version::version(
        &mut ThreadUniformSource,
        min,
        max,
        &VersionCeilings::default(),
    )
}

/// Samples a string of `min_len..=max_len` characters from `alphabet`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` for reversed lengths or
/// `SamplingError::EntropyUnavailable` if the operating system cannot supply
/// random bytes.
pub fn string(min_len: usize, max_len: usize, alphabet: &Alphabet) -> Result<String, SamplingError> {
    let selector = UnbiasedSelector::new(alphabet);
    selector::string(
        &mut ThreadUniformSource,
        &mut OsByteSource,
        Range::new(min_len, max_len),
        &selector,
    )
}

/// Picks one lexicon word.
#[must_use]
pub fn word(title_case: bool) -> String {
    synth::word(&mut ThreadUniformSource, title_case)
}

/// Builds a phrase.
///
/// # Errors
///
/// Returns `SamplingError::WordCountInvalid` if a bound is below 2.
pub fn phrase(options: &PhraseOptions) -> Result<String, SamplingError> {
    synth::phrase(&mut ThreadUniformSource, options)
}

/// Builds a sentence.
///
/// # Errors
///
/// Returns `SamplingError::WordCountInvalid` if a bound is below 3.
pub fn sentence(options: &SentenceOptions) -> Result<String, SamplingError> {
    synth::sentence(&mut ThreadUniformSource, options)
}

/// Builds paragraphs.
///
/// # Errors
///
/// Returns an error for out-of-range paragraph, sentence or word counts.
pub fn paragraphs(options: &ParagraphOptions) -> Result<String, SamplingError> {
    synth::paragraphs(&mut ThreadUniformSource, options)
}

/// Picks one of `values` uniformly.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `values` is empty.
pub fn enum_value<T: Clone>(values: &[T]) -> Result<T, SamplingError> {
    choice::enum_value(&mut ThreadUniformSource, values)
}

/// Picks an element of `items`, or `default` when absent or empty.
#[must_use]
pub fn pick<I: IntoIterator>(items: Option<I>, default: I::Item) -> I::Item {
    choice::pick(&mut ThreadUniformSource, items, default)
}

/// Samples an IPv4 address.
#[must_use]
pub fn ipv4_address() -> Ipv4Addr {
    network::ipv4_address(&mut ThreadUniformSource)
}

/// Samples a latitude/longitude pair.
#[must_use]
pub fn coordinate() -> Coordinate {
    geo::coordinate(&mut ThreadUniformSource)
}

/// Samples a version-4 UUID.
#[must_use]
pub fn uuid() -> Uuid {
    identifier::uuid(&mut ThreadUniformSource)
}
