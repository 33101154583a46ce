use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

pub fn v6(s: &str) -> IpAddr {
    IpAddr::V6(s.parse::<Ipv6Addr>().unwrap())
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

/// Builds an offset from big-endian magnitude bytes.
pub fn big(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(num_bigint::Sign::Plus, bytes)
}

pub fn pow2(exp: u32) -> BigInt {
    BigInt::from(1u8) << exp
}

/// Fixed seed so failures reproduce.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x1b5_7e9)
}

pub fn random_v4(rng: &mut StdRng) -> IpAddr {
    IpAddr::V4(Ipv4Addr::from(rng.random::<u32>()))
}

pub fn random_v6(rng: &mut StdRng) -> IpAddr {
    IpAddr::V6(Ipv6Addr::from(rng.random::<u128>()))
}
