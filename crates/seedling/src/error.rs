//! Facade error type.

use seedling_core::error::SamplingError;
use thiserror::Error;

/// Errors surfaced by the facade.
#[derive(Debug, Error)]
pub enum Error {
    /// A sampling contract was violated.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Generator configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
