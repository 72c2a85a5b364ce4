//! Geographic coordinate sampling.

use std::fmt;

use serde::{Deserialize, Serialize};
use seedling_core::rng::UniformSource;

use crate::numeric::interpolate;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in `[-180, 180]`.
    pub longitude: f64,
}

/// Renders as `"lat,lng"`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Samples a coordinate uniformly over latitude and longitude.
#[must_use]
pub fn coordinate(rng: &mut dyn UniformSource) -> Coordinate {
    Coordinate {
        latitude: interpolate(rng, -90.0, 90.0),
        longitude: interpolate(rng, -180.0, 180.0),
    }
}
