//! # ipstep core
//!
//! Exact, range-checked arithmetic on IPv4 and IPv6 addresses.
//!
//! An address is treated as an unsigned integer of its family's width
//! (32 or 128 bits). Offsets are arbitrary-precision signed integers; the sum
//! is computed without wrapping and rejected with a [`RangeError`] when it
//! falls below the all-zeros address or above the all-ones address.
//!
//! ```
//! use std::net::IpAddr;
//! use ipstep_core::{add, sub};
//!
//! let addr: IpAddr = "192.0.2.255".parse().unwrap();
//! assert_eq!(add(addr, 1).unwrap(), "192.0.3.0".parse::<IpAddr>().unwrap());
//! assert!(sub("0.0.0.0".parse().unwrap(), 1).is_err());
//! ```

pub mod arithmetic;
pub mod ext;
pub mod offset;

pub use arithmetic::{add, add_big, distance, from_integer, sub, sub_big, to_integer};
pub use ext::IpArithmetic;
pub use offset::{OffsetParseError, parse_offset};

pub use ipstep_common::error::RangeError;
pub use ipstep_common::network::family::{Family, canonical, is_ipv4, is_ipv6};
