//! # Offset Engine
//!
//! Applies a signed offset to an address.
//!
//! The address is reduced to its canonical form, read as a big-endian
//! unsigned integer, summed with the offset in [`BigInt`], checked against
//! the family bounds and written back as exactly as many bytes as the family
//! uses.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use num_bigint::{BigInt, Sign};
use tracing::{debug, trace};

use ipstep_common::error::RangeError;
use ipstep_common::network::family::{self, Family};
use ipstep_common::utils::bytes;

/// `addr + n`.
pub fn add(addr: IpAddr, n: u64) -> Result<IpAddr, RangeError> {
    apply(addr, &BigInt::from(n))
}

/// `addr + n`, where `n` may be negative.
pub fn add_big(addr: IpAddr, n: &BigInt) -> Result<IpAddr, RangeError> {
    apply(addr, n)
}

/// `addr - n`.
pub fn sub(addr: IpAddr, n: u64) -> Result<IpAddr, RangeError> {
    apply(addr, &-BigInt::from(n))
}

/// `addr - n`, where `n` may be negative.
pub fn sub_big(addr: IpAddr, n: &BigInt) -> Result<IpAddr, RangeError> {
    apply(addr, &-n)
}

/// Integer value of the canonical form of `addr`.
pub fn to_integer(addr: IpAddr) -> BigInt {
    match family::canonical(addr) {
        IpAddr::V4(v4) => BigInt::from_bytes_be(Sign::Plus, &v4.octets()),
        IpAddr::V6(v6) => BigInt::from_bytes_be(Sign::Plus, &v6.octets()),
    }
}

/// Builds the address of `family` whose integer value is `value`.
pub fn from_integer(family: Family, value: &BigInt) -> Result<IpAddr, RangeError> {
    match family {
        Family::V4 => encode::<4>(family, value).map(|o| IpAddr::V4(Ipv4Addr::from(o))),
        Family::V6 => encode::<16>(family, value).map(|o| IpAddr::V6(Ipv6Addr::from(o))),
    }
}

/// Signed offset `n` such that `add_big(from, &n) == Ok(to)`.
///
/// `None` when the two addresses belong to different canonical families. An
/// IPv6 address and an address inside `::ffff:0:0/96` count as different
/// families, even when the second was reached by adding to the first.
pub fn distance(from: IpAddr, to: IpAddr) -> Option<BigInt> {
    if Family::of(from) != Family::of(to) {
        return None;
    }
    Some(to_integer(to) - to_integer(from))
}

/// Offset engine for a concrete IPv4 address.
pub fn offset_v4(addr: Ipv4Addr, offset: &BigInt) -> Result<Ipv4Addr, RangeError> {
    offset_octets(&addr.octets(), offset, Family::V4).map(Ipv4Addr::from)
}

/// Offset engine for a concrete IPv6 address.
///
/// Works on all 128 bits, an IPv4-mapped value is not reduced here.
pub fn offset_v6(addr: Ipv6Addr, offset: &BigInt) -> Result<Ipv6Addr, RangeError> {
    offset_octets(&addr.octets(), offset, Family::V6).map(Ipv6Addr::from)
}

// An IPv6 input may land inside `::ffff:0:0/96`. The result is still returned
// as `IpAddr::V6`, but it classifies as IPv4 from then on.
fn apply(addr: IpAddr, offset: &BigInt) -> Result<IpAddr, RangeError> {
    let result = match family::canonical(addr) {
        IpAddr::V4(v4) => offset_v4(v4, offset).map(IpAddr::V4),
        IpAddr::V6(v6) => offset_v6(v6, offset).map(IpAddr::V6),
    };

    match &result {
        Ok(out) => trace!(%addr, %offset, result = %out, "offset applied"),
        Err(e) => debug!(%addr, %offset, family = %e.family, "offset rejected"),
    }
    result
}

fn offset_octets<const N: usize>(
    octets: &[u8; N],
    offset: &BigInt,
    family: Family,
) -> Result<[u8; N], RangeError> {
    let sum = BigInt::from_bytes_be(Sign::Plus, octets) + offset;
    encode::<N>(family, &sum)
}

fn encode<const N: usize>(family: Family, value: &BigInt) -> Result<[u8; N], RangeError> {
    if !family.contains(value) {
        return Err(RangeError::new(family));
    }

    let (_, magnitude) = value.to_bytes_be();
    bytes::left_pad::<N>(&magnitude).ok_or(RangeError::new(family))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
