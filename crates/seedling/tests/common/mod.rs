//! Shared helpers for facade integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use seedling::{Generator, GeneratorConfig, SharedSource, StdRngSource};
use seedling_test_support::{FixedClock, init_tracing};

/// Number of draws used by statistical assertions.
pub const TRIALS: usize = 10_000;

/// Fixed timestamp used across integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    FixedClock::at(2026, 1, 15, 10, 0, 0).0
}

/// A system-backed generator with test tracing installed.
pub fn system_generator() -> Generator {
    init_tracing();
    Generator::system().with_clock(Box::new(FixedClock(fixed_now())))
}

/// A seeded generator with a fixed clock and the given configuration.
pub fn seeded_generator(seed: u64, config: GeneratorConfig) -> Generator {
    init_tracing();
    let source = SharedSource::new(StdRngSource::seeded(seed));
    Generator::new(
        Box::new(source.clone()),
        Box::new(source),
        Box::new(FixedClock(fixed_now())),
        config,
    )
}
