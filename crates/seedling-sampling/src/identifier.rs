//! Identifier sampling.

use seedling_core::rng::UniformSource;
use uuid::{Builder, Uuid};

/// Samples a version 4 UUID from sixteen uniform bytes.
#[must_use]
pub fn uuid(rng: &mut dyn UniformSource) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
