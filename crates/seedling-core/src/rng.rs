//! Random source abstractions.
//!
//! Samplers never reach for a global generator directly. They draw from an
//! injected `UniformSource` (and, for string generation, a
//! `SecureByteSource`) so tests and replays can substitute a seeded or
//! scripted implementation. The production implementations here are
//! stateless handles onto `rand`'s thread-local generator and the operating
//! system's entropy pool.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng, TryRngCore};

use crate::error::SamplingError;

/// Abstraction over a uniform random bit source.
pub trait UniformSource: Send + Sync {
    /// Generate a uniformly distributed `u64` in `[0, bound)`.
    ///
    /// A `bound` of zero yields zero.
    fn next_below(&mut self, bound: u64) -> u64;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Fill `dest` with uniformly distributed bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Abstraction over a cryptographically strong byte source.
pub trait SecureByteSource: Send + Sync {
    /// Fill `dest` with unpredictable bytes.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EntropyUnavailable` if the underlying source
    /// cannot produce bytes.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), SamplingError>;
}

/// Process-wide uniform source backed by `rand`'s thread-local generator.
///
/// Each draw goes to the calling thread's generator, so any number of threads
/// can use their own copy of this handle without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadUniformSource;

impl UniformSource for ThreadUniformSource {
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::rng().random_range(0..bound)
    }

    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }
}

/// Secure byte source backed by the operating system's entropy pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsByteSource;

impl SecureByteSource for OsByteSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), SamplingError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::warn!(error = %e, "operating system entropy source failed");
            SamplingError::EntropyUnavailable(e.to_string())
        })
    }
}

/// Adapter exposing any `rand` generator as a source.
///
/// Cryptographically secure generators (such as `StdRng`) also implement
/// `SecureByteSource`, which makes seeded, reproducible string generation
/// possible.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

/// A seedable source built on `rand`'s standard generator.
pub type StdRngSource = RngSource<StdRng>;

impl<R> RngSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl StdRngSource {
    /// Creates a reproducible source from a 64-bit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send + Sync> UniformSource for RngSource<R> {
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.0.random_range(0..bound)
    }

    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

impl<R: RngCore + CryptoRng + Send + Sync> SecureByteSource for RngSource<R> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), SamplingError> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

/// A source shared between threads behind a mutex.
///
/// Cloning is cheap and every clone draws from the same underlying
/// generator. A poisoned lock is recovered: a panic elsewhere cannot leave a
/// generator in a state that is unsafe to keep drawing from.
#[derive(Debug)]
pub struct SharedSource<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedSource<S> {
    /// Wraps `source` for shared use.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(source)),
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut S) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<S> Clone for SharedSource<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UniformSource> UniformSource for SharedSource<S> {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.with(|source| source.next_below(bound))
    }

    fn next_f64(&mut self) -> f64 {
        self.with(UniformSource::next_f64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with(|source| source.fill_bytes(dest));
    }
}

impl<S: SecureByteSource> SecureByteSource for SharedSource<S> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), SamplingError> {
        self.with(|source| source.try_fill(dest))
    }
}
