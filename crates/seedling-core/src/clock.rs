//! Clock abstraction for relative date-time sampling.

use chrono::{DateTime, TimeDelta, Utc};

/// Source of "now" for windows such as "within the last week".
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns `now() + delta`, saturating at the representable extremes
    /// instead of failing.
    fn offset(&self, delta: TimeDelta) -> DateTime<Utc> {
        let now = self.now();
        now.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pinned(DateTime<Utc>);

    impl Clock for Pinned {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_offset_moves_from_now() {
        let clock = Pinned(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(
            clock.offset(TimeDelta::hours(-2)),
            DateTime::<Utc>::UNIX_EPOCH - TimeDelta::hours(2)
        );
    }

    #[test]
    fn test_offset_saturates_at_extremes() {
        let clock = Pinned(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(clock.offset(TimeDelta::MIN), DateTime::<Utc>::MIN_UTC);
        assert_eq!(clock.offset(TimeDelta::MAX), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_system_clock_advances() {
        let before = Utc::now();
        assert!(SystemClock.now() >= before);
    }
}
