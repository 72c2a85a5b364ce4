//! Pinned clock for time-window tests.

use chrono::{DateTime, TimeZone, Utc};
use seedling_core::clock::Clock;

/// A clock stuck at one instant, so "recent" and "soon" windows have known
/// edges.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to a UTC calendar time.
    ///
    /// # Panics
    ///
    /// Panics if the fields do not name a valid UTC time.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .unwrap_or_else(|| {
                panic!("invalid fixed clock time {year}-{month}-{day} {hour}:{min}:{sec}")
            });
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_at_pins_calendar_time() {
        let clock = FixedClock::at(2026, 1, 15, 10, 0, 0);
        assert_eq!(clock.now().to_rfc3339(), "2026-01-15T10:00:00+00:00");
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_offset_uses_pinned_time() {
        let clock = FixedClock::at(2024, 2, 29, 0, 0, 0);
        assert_eq!(clock.offset(TimeDelta::days(1)), FixedClock::at(2024, 3, 1, 0, 0, 0).0);
    }

    #[test]
    #[should_panic(expected = "invalid fixed clock time")]
    fn test_at_rejects_impossible_dates() {
        let _ = FixedClock::at(2023, 2, 29, 0, 0, 0);
    }
}
