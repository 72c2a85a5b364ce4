//! Inclusive sampling ranges.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// Types with a smallest and largest representable value.
///
/// Used to fill in absent range bounds. Floating-point types report their
/// finite extremes, never infinities.
pub trait Bounded: Sized {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_bounded!(i32, i64, u32, u64, usize, f64);

impl Bounded for DateTime<Utc> {
    const MIN: Self = DateTime::<Utc>::MIN_UTC;
    const MAX: Self = DateTime::<Utc>::MAX_UTC;
}

impl Bounded for TimeDelta {
    const MIN: Self = TimeDelta::MIN;
    const MAX: Self = TimeDelta::MAX;
}

/// An inclusive `[min, max]` bound pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range<T> {
    /// Lower bound, inclusive.
    pub min: T,
    /// Upper bound, inclusive.
    pub max: T,
}

/// Outcome of validating a `Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<T> {
    /// Both bounds are equal; sampling must return this value without
    /// drawing.
    Point(T),
    /// A well-ordered range with `min < max`.
    Between(T, T),
}

impl<T> Range<T> {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Bounded> Range<T> {
    /// The full representable range of `T`.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Creates a range whose absent bounds default to the type's extremes.
    #[must_use]
    pub fn from_options(min: Option<T>, max: Option<T>) -> Self {
        Self {
            min: min.unwrap_or(T::MIN),
            max: max.unwrap_or(T::MAX),
        }
    }

    /// `[min, T::MAX]`.
    #[must_use]
    pub const fn at_least(min: T) -> Self {
        Self { min, max: T::MAX }
    }

    /// `[T::MIN, max]`.
    #[must_use]
    pub const fn at_most(max: T) -> Self {
        Self { min: T::MIN, max }
    }
}

impl<T: Bounded> Default for Range<T> {
    fn default() -> Self {
        Self::full()
    }
}

impl<T: PartialOrd + Display> Range<T> {
    /// Validates the range.
    ///
    /// Equal bounds short-circuit to `Span::Point` before the ordering check.
    /// Bounds that are unordered (such as a NaN) are rejected the same way as
    /// reversed bounds.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::RangeInvalid` if `min > max` or the bounds are
    /// not comparable.
    pub fn span(self) -> Result<Span<T>, SamplingError> {
        if self.min == self.max {
            return Ok(Span::Point(self.min));
        }
        if self.min < self.max {
            Ok(Span::Between(self.min, self.max))
        } else {
            Err(SamplingError::range_invalid(self.min, self.max))
        }
    }

    /// Returns `true` if `value` lies within the range.
    pub fn contains(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_bounds_yield_point() {
        assert_eq!(Range::new(5, 5).span(), Ok(Span::Point(5)));
    }

    #[test]
    fn test_ordered_bounds_yield_between() {
        assert_eq!(Range::new(-3, 9).span(), Ok(Span::Between(-3, 9)));
    }

    #[test]
    fn test_reversed_bounds_are_rejected() {
        match Range::new(9, -3).span() {
            Err(SamplingError::RangeInvalid { min, max }) => {
                assert_eq!(min, "9");
                assert_eq!(max, "-3");
            }
            other => panic!("expected RangeInvalid, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        assert!(Range::new(f64::NAN, 1.0).span().is_err());
        assert!(Range::new(0.0, f64::NAN).span().is_err());
    }

    #[test]
    fn test_absent_bounds_default_to_extremes() {
        let range = Range::<i32>::from_options(None, Some(10));
        assert_eq!(range, Range::new(i32::MIN, 10));

        let range = Range::<i64>::from_options(Some(-1), None);
        assert_eq!(range, Range::new(-1, i64::MAX));

        assert_eq!(Range::<f64>::default(), Range::new(f64::MIN, f64::MAX));
    }

    #[test]
    fn test_at_least_and_at_most() {
        assert_eq!(Range::at_least(4u32), Range::new(4, u32::MAX));
        assert_eq!(Range::at_most(4u32), Range::new(0, 4));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = Range::new(1, 3);
        assert!(range.contains(&1));
        assert!(range.contains(&3));
        assert!(!range.contains(&4));
    }

    #[test]
    fn test_range_deserializes_from_json() {
        let range: Range<i64> = serde_json::from_str(r#"{"min": 2, "max": 8}"#).unwrap();
        assert_eq!(range, Range::new(2, 8));
    }
}
