//! Date-time and duration sampling.
//!
//! Both reduce to sampling an integer offset over the span between the
//! bounds and adding it back to the lower bound. The offset is drawn at
//! nanosecond resolution when the span fits in an `i64`; wider spans fall back
//! to microseconds, then milliseconds, then seconds.

use chrono::{DateTime, TimeDelta, Utc};
use seedling_core::clock::Clock;
use seedling_core::error::SamplingError;
use seedling_core::range::{Range, Span};
use seedling_core::rng::UniformSource;

use crate::numeric::wide_integer;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Offset resolutions in nanoseconds, finest first.
const RESOLUTIONS: [i128; 4] = [1, 1_000, 1_000_000, 1_000_000_000];

/// Samples a date-time uniformly from `range`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
pub fn datetime(
    rng: &mut dyn UniformSource,
    range: Range<DateTime<Utc>>,
) -> Result<DateTime<Utc>, SamplingError> {
    let (start, end) = match range.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(start, end) => (start, end),
    };

    let span = total_nanos(end.signed_duration_since(start));
    let offset = from_nanos(sample_offset(rng, span)?)
        .ok_or_else(|| SamplingError::range_invalid(start, end))?;
    start
        .checked_add_signed(offset)
        .ok_or_else(|| SamplingError::range_invalid(start, end))
}

/// Samples a duration uniformly from `range`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `range.min > range.max`.
pub fn duration(
    rng: &mut dyn UniformSource,
    range: Range<TimeDelta>,
) -> Result<TimeDelta, SamplingError> {
    let (min, max) = match range.span()? {
        Span::Point(value) => return Ok(value),
        Span::Between(min, max) => (min, max),
    };

    let low = total_nanos(min);
    let span = total_nanos(max) - low;
    let offset = sample_offset(rng, span)?;
    from_nanos(low + offset).ok_or_else(|| SamplingError::range_invalid(min, max))
}

/// Samples a date-time within `within` before the clock's current time.
///
/// The sign of `within` is ignored.
///
/// # Errors
///
/// Propagates `datetime` errors; none occur for a well-formed clock.
pub fn recent(
    rng: &mut dyn UniformSource,
    clock: &dyn Clock,
    within: TimeDelta,
) -> Result<DateTime<Utc>, SamplingError> {
    let now = clock.now();
    datetime(rng, Range::new(clock.offset(-within.abs()), now))
}

/// Samples a date-time within `within` after the clock's current time.
///
/// The sign of `within` is ignored.
///
/// # Errors
///
/// Propagates `datetime` errors; none occur for a well-formed clock.
pub fn soon(
    rng: &mut dyn UniformSource,
    clock: &dyn Clock,
    within: TimeDelta,
) -> Result<DateTime<Utc>, SamplingError> {
    let now = clock.now();
    datetime(rng, Range::new(now, clock.offset(within.abs())))
}

/// Draws an offset in `[0, span]` nanoseconds at the finest resolution whose
/// unit count fits in an `i64`.
fn sample_offset(rng: &mut dyn UniformSource, span: i128) -> Result<i128, SamplingError> {
    for unit in RESOLUTIONS {
        if let Ok(units) = i64::try_from(span / unit) {
            let drawn = wide_integer(rng, Range::new(0, units))?;
            return Ok(i128::from(drawn) * unit);
        }
    }
    Err(SamplingError::range_invalid(0, span))
}

fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

fn from_nanos(nanos: i128) -> Option<TimeDelta> {
    let seconds = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).ok()?;
    let subsec = u32::try_from(nanos.rem_euclid(NANOS_PER_SECOND)).ok()?;
    TimeDelta::new(seconds, subsec)
}
