//! Seedling — bounded-range sampling.
//!
//! Converts draws from a `UniformSource` into values inside inclusive
//! ranges for every supported numeric width, for date-times, durations and
//! version numbers, and picks uniformly from collections and enumerations.

pub mod choice;
pub mod geo;
pub mod identifier;
pub mod network;
pub mod numeric;
pub mod temporal;
pub mod version;
