//! Network address sampling.

use std::net::Ipv4Addr;

use seedling_core::rng::UniformSource;

/// Samples an IPv4 address with every octet uniform in `0..=255`.
#[must_use]
pub fn ipv4_address(rng: &mut dyn UniformSource) -> Ipv4Addr {
    Ipv4Addr::new(octet(rng), octet(rng), octet(rng), octet(rng))
}

#[allow(clippy::cast_possible_truncation)]
fn octet(rng: &mut dyn UniformSource) -> u8 {
    rng.next_below(256) as u8
}
