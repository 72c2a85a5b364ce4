//! Four-component version sampling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use seedling_core::error::SamplingError;
use seedling_core::rng::UniformSource;
use thiserror::Error;
use tracing::instrument;

/// A `major.minor.build.revision` version, ordered lexicographically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version {
    /// Most significant component.
    pub major: u32,
    /// Second component.
    pub minor: u32,
    /// Third component.
    pub build: u32,
    /// Least significant component.
    pub revision: u32,
}

/// Upper limits used for components the caller leaves unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionCeilings {
    /// Ceiling for `major` when the upper bound omits it.
    pub major: u32,
    /// Ceiling for `minor`.
    pub minor: u32,
    /// Ceiling for `build`.
    pub build: u32,
    /// Ceiling for `revision`.
    pub revision: u32,
}

impl Default for VersionCeilings {
    fn default() -> Self {
        Self {
            major: 100,
            minor: 100,
            build: 9999,
            revision: 9999,
        }
    }
}

impl VersionCeilings {
    fn components(self) -> [u32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }
}

/// Error returned when strictly parsing a version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version {input:?}: expected four dot-separated unsigned integers")]
pub struct ParseVersionError {
    input: String,
}

impl Version {
    /// Creates a version from its four components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parses a lower bound leniently: missing or unparsable components
    /// become `0`.
    #[must_use]
    pub fn parse_floor(input: &str) -> Self {
        Self::from(lenient_components(input, [0; 4]))
    }

    /// Parses an upper bound leniently: missing or unparsable components
    /// become the matching ceiling.
    #[must_use]
    pub fn parse_ceiling(input: &str, ceilings: &VersionCeilings) -> Self {
        Self::from(lenient_components(input, ceilings.components()))
    }

    fn components(self) -> [u32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }
}

impl From<[u32; 4]> for Version {
    fn from([major, minor, build, revision]: [u32; 4]) -> Self {
        Self::new(major, minor, build, revision)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || ParseVersionError {
            input: input.to_owned(),
        };
        let mut parts = input.split('.');
        let mut components = [0u32; 4];
        for slot in &mut components {
            *slot = parts
                .next()
                .and_then(|part| part.parse().ok())
                .ok_or_else(error)?;
        }
        if parts.next().is_some() {
            return Err(error());
        }
        Ok(Self::from(components))
    }
}

fn lenient_components(input: &str, defaults: [u32; 4]) -> [u32; 4] {
    let mut parts = input.split('.');
    defaults.map(|default| {
        parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .unwrap_or(default)
    })
}

/// Samples a version between two leniently parsed bounds.
///
/// See [`version_between`] for the sampling rule.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if the parsed lower bound is greater
/// than the parsed upper bound.
#[instrument(level = "trace", skip(rng, ceilings))]
pub fn version(
    rng: &mut dyn UniformSource,
    min: &str,
    max: &str,
    ceilings: &VersionCeilings,
) -> Result<Version, SamplingError> {
    let low = Version::parse_floor(min);
    let high = Version::parse_ceiling(max, ceilings);
    version_between(rng, low, high, ceilings)
}

/// Samples a version in `[low, high]` without rejection.
///
/// Components are drawn most significant first. A component is pinned below
/// by `low` only while every earlier component equals `low`'s, and above by
/// `high` only while every earlier component equals `high`'s; once free it
/// ranges over `0..=ceiling`.
///
/// # Errors
///
/// Returns `SamplingError::RangeInvalid` if `low > high`.
pub fn version_between(
    rng: &mut dyn UniformSource,
    low: Version,
    high: Version,
    ceilings: &VersionCeilings,
) -> Result<Version, SamplingError> {
    if low == high {
        return Ok(low);
    }
    if low > high {
        return Err(SamplingError::range_invalid(low, high));
    }

    let lows = low.components();
    let highs = high.components();
    let caps = ceilings.components();
    let mut sampled = [0u32; 4];
    let mut pinned_low = true;
    let mut pinned_high = true;

    for (index, slot) in sampled.iter_mut().enumerate() {
        let lower = if pinned_low { lows[index] } else { 0 };
        let upper = if pinned_high {
            highs[index]
        } else {
            caps[index].max(lower)
        };
        let value = component(rng, lower, upper);
        pinned_low &= value == lows[index];
        pinned_high &= value == highs[index];
        *slot = value;
    }

    Ok(Version::from(sampled))
}

#[allow(clippy::cast_possible_truncation)]
fn component(rng: &mut dyn UniformSource, lower: u32, upper: u32) -> u32 {
    let width = u64::from(upper - lower) + 1;
    lower + rng.next_below(width) as u32
}
