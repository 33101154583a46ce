use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use num_bigint::BigInt;

use ipstep_common::error::RangeError;
use ipstep_common::network::family::Family;

use crate::arithmetic;

/// Range-checked offset arithmetic as methods on the `std::net` address types.
///
/// `IpAddr` follows the canonical reduction, so an IPv4-mapped value comes back
/// as `IpAddr::V4`. `Ipv4Addr` and `Ipv6Addr` keep their own type and width.
pub trait IpArithmetic: Sized {
    fn checked_add_big(self, n: &BigInt) -> Result<Self, RangeError>;

    fn family(self) -> Family;

    fn checked_add_offset(self, n: u64) -> Result<Self, RangeError> {
        self.checked_add_big(&BigInt::from(n))
    }

    fn checked_sub_offset(self, n: u64) -> Result<Self, RangeError> {
        self.checked_add_big(&-BigInt::from(n))
    }

    fn checked_sub_big(self, n: &BigInt) -> Result<Self, RangeError> {
        self.checked_add_big(&-n)
    }
}

impl IpArithmetic for IpAddr {
    fn checked_add_big(self, n: &BigInt) -> Result<Self, RangeError> {
        arithmetic::add_big(self, n)
    }

    fn family(self) -> Family {
        Family::of(self)
    }
}

impl IpArithmetic for Ipv4Addr {
    fn checked_add_big(self, n: &BigInt) -> Result<Self, RangeError> {
        arithmetic::offset_v4(self, n)
    }

    fn family(self) -> Family {
        Family::V4
    }
}

impl IpArithmetic for Ipv6Addr {
    fn checked_add_big(self, n: &BigInt) -> Result<Self, RangeError> {
        arithmetic::offset_v6(self, n)
    }

    fn family(self) -> Family {
        Family::V6
    }
}
