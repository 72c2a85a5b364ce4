//! Numeric range sampling.
//!
//! Every sampler accepts an inclusive `Range`. Equal bounds return the bound
//! without drawing; reversed bounds fail with `SamplingError::RangeInvalid`.
//! Width arithmetic is always carried out in a type one size wider than the
//! sampled type so full-range requests never overflow.

use seedling_core::error::SamplingError;
use seedling_core::range::{Range, Span};
use seedling_core::rng::UniformSource;

/// Largest number of decimal places `decimal` honours.
pub const MAX_DECIMAL_PLACES: u8 = 15;

/// Samples an `i32` uniformly from `range`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn integer(rng: &mut dyn UniformSource, range: Range<i32>) -> Result<i32, SamplingError> {
    let (min, max) = match range.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };

    let width = (i64::from(max) - i64::from(min) + 1).unsigned_abs();
    let offset = rng.next_below(width);
    Ok((i64::from(min) + offset as i64) as i32)
}

/// Samples an `i64` from `range`.
///
/// Draws one raw 64-bit word from the source and reduces it modulo the
/// inclusive span. The reduction is slightly biased towards low offsets when
/// the span does not divide 2^64; fixture data tolerates that, so no
/// rejection step is spent on it. The full `i64` range uses the raw word
/// directly.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
#[allow(clippy::cast_possible_truncation)]
pub fn wide_integer(rng: &mut dyn UniformSource, range: Range<i64>) -> Result<i64, SamplingError> {
    let (min, max) = match range.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };

    let raw = next_word(rng);
    let span = (i128::from(max) - i128::from(min) + 1).unsigned_abs();
    let offset = match u64::try_from(span) {
        Ok(width) => raw % width,
        Err(_) => raw,
    };
    Ok((i128::from(min) + i128::from(offset)) as i64)
}

/// Samples a `usize` uniformly from `range`. Used for lengths and counts.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
#[allow(clippy::cast_possible_truncation)]
pub fn count(rng: &mut dyn UniformSource, range: Range<usize>) -> Result<usize, SamplingError> {
    let (min, max) = match range.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };

    let span = (max - min) as u64;
    let offset = match span.checked_add(1) {
        Some(width) => rng.next_below(width),
        None => next_word(rng),
    };
    Ok(min + offset as usize)
}

/// Samples an `f64` from `range` by linear interpolation.
///
/// Computes `min·(1-u) + max·u` for a unit draw `u`, which equals
/// `u·(max-min) + min` but stays finite across the full finite `f64` range.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max` or either
/// bound is NaN or infinite.
pub fn real(rng: &mut dyn UniformSource, range: Range<f64>) -> Result<f64, SamplingError> {
    let (min, max) = match finite(range)?.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };
    Ok(interpolate(rng, min, max))
}

/// Samples a decimal value with at most `places` fractional digits.
///
/// The bounds are scaled by `10^places`, the integers between them are
/// sampled with `wide_integer`, and the result is narrowed back through
/// `f64`. With `places == 0` this is plain integer sampling over the bounds.
///
/// When a scaled bound would not fit in an `i64`, precision is lowered one
/// place at a time until both fit, so the whole range stays reachable. Whole
/// numbers beyond `2^63` are drawn by interpolation and rounded. Values beyond
/// 2^53 lose precision in the narrowing step. When no value of the requested
/// precision lies inside the range, the lower bound is returned unchanged.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max` or either
/// bound is NaN or infinite.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn decimal(
    rng: &mut dyn UniformSource,
    range: Range<f64>,
    places: u8,
) -> Result<f64, SamplingError> {
    let (min, max) = match finite(range)?.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };

    let requested = places.min(MAX_DECIMAL_PLACES);
    let mut places = requested;
    loop {
        let scale = 10f64.powi(i32::from(places));
        let low = (min * scale).ceil();
        let high = (max * scale).floor();
        if low > high {
            return Ok(min);
        }

        if fits_i64(low) && fits_i64(high) {
            if places < requested {
                tracing::debug!(requested, places, "lowered decimal precision to fit range");
            }
            let scaled = wide_integer(rng, Range::new(low as i64, high as i64))?;
            return Ok((scaled as f64 / scale).clamp(min, max));
        }

        if places == 0 {
            return Ok(interpolate(rng, low, high).round().clamp(low, high));
        }
        places -= 1;
    }
}

/// Returns `true` with the given percentage chance.
///
/// `chance_percent` is clamped to `[0, 100]`; NaN counts as zero. A chance of
/// zero never returns `true` and a chance of one hundred always does.
pub fn boolean(rng: &mut dyn UniformSource, chance_percent: f64) -> bool {
    let chance = if chance_percent.is_nan() {
        0.0
    } else {
        chance_percent.clamp(0.0, 100.0)
    };
    if chance <= 0.0 {
        return false;
    }
    if chance >= 100.0 {
        return true;
    }
    rng.next_f64() > 1.0 - chance / 100.0
}

/// Interpolates between two finite, ordered bounds.
pub(crate) fn interpolate(rng: &mut dyn UniformSource, min: f64, max: f64) -> f64 {
    let unit = rng.next_f64();
    (min * (1.0 - unit) + max * unit).clamp(min, max)
}

fn finite(range: Range<f64>) -> Result<Range<f64>, SamplingError> {
    if range.min.is_infinite() || range.max.is_infinite() {
        return Err(SamplingError::range_invalid(range.min, range.max));
    }
    Ok(range)
}

/// `2^63`, the first magnitude an `i64` cannot hold.
const I64_EDGE: f64 = 9_223_372_036_854_775_808.0;

fn fits_i64(value: f64) -> bool {
    (-I64_EDGE..I64_EDGE).contains(&value)
}

fn next_word(rng: &mut dyn UniformSource) -> u64 {
    let mut raw = [0u8; 8];
    rng.fill_bytes(&mut raw);
    u64::from_le_bytes(raw)
}
