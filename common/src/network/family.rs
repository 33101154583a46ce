//! # Address Families
//!
//! Classifies addresses as IPv4 or IPv6 and holds the per-family bounds.
//!
//! Every decision about an address's family goes through [`canonical`], which
//! reduces an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`) to its 4-byte form.
//! The classifier and the arithmetic engine both use it, so they can never
//! disagree about which width an address has.

use std::fmt;
use std::net::IpAddr;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::Zero;

static ZERO: OnceLock<BigInt> = OnceLock::new();
static MAX_IPV4: OnceLock<BigInt> = OnceLock::new();
static MAX_IPV6: OnceLock<BigInt> = OnceLock::new();

/// The two address spaces an address can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 32-bit address space, 4 bytes on the wire.
    V4,
    /// 128-bit address space, 16 bytes on the wire.
    V6,
}

impl Family {
    /// Classifies `addr` after canonical reduction.
    pub fn of(addr: IpAddr) -> Self {
        match canonical(addr) {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    pub const fn byte_len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    pub const fn bits(self) -> u32 {
        self.byte_len() as u32 * 8
    }

    /// Lowest integer value of the family (the all-zeros address).
    pub fn min_value(self) -> &'static BigInt {
        ZERO.get_or_init(BigInt::zero)
    }

    /// Highest integer value of the family (the all-ones address), `2^bits - 1`.
    pub fn max_value(self) -> &'static BigInt {
        match self {
            Family::V4 => MAX_IPV4.get_or_init(|| BigInt::from(u32::MAX)),
            Family::V6 => MAX_IPV6.get_or_init(|| BigInt::from(u128::MAX)),
        }
    }

    /// Whether `value` is a valid address integer for this family.
    pub fn contains(self, value: &BigInt) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Reduces an address to its shortest valid family-specific form.
///
/// IPv4-mapped IPv6 addresses become IPv4, anything else is returned as is.
/// IPv4-compatible addresses (`::a.b.c.d`) are deprecated and stay IPv6.
pub fn canonical(addr: IpAddr) -> IpAddr {
    addr.to_canonical()
}

pub fn is_ipv4(addr: IpAddr) -> bool {
    Family::of(addr) == Family::V4
}

pub fn is_ipv6(addr: IpAddr) -> bool {
    Family::of(addr) == Family::V6
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
