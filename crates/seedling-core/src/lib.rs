//! Seedling Core — shared sampling abstractions.
//!
//! This crate defines the random sources every sampler draws from, the
//! inclusive `Range` type with its validation rules, the clock seam, and the
//! error taxonomy. It contains no sampling algorithms.

pub mod clock;
pub mod error;
pub mod range;
pub mod rng;
