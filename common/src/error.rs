use thiserror::Error;

use crate::network::family::Family;

/// Raised when an offset moves an address outside of its family's value space.
///
/// The operation that produced it has no partial result; the caller gets this
/// error instead of an address.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("range error: result is outside the {family} address space")]
pub struct RangeError {
    pub family: Family,
}

impl RangeError {
    pub fn new(family: Family) -> Self {
        Self { family }
    }
}
