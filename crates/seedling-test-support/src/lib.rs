//! Shared test doubles and utilities for the Seedling fixture generator.

mod bytes;
mod clock;
mod logging;
mod rng;

pub use bytes::{FailingByteSource, FixedBytes};
pub use clock::FixedClock;
pub use logging::init_tracing;
pub use rng::{MockSource, SequenceSource};
