//! Offset parsing for textual front ends.
//!
//! Accepts an optional sign followed by decimal digits, or by `0x`-prefixed
//! hexadecimal digits: `42`, `-42`, `+0x100`. Digit separators such as
//! `1_000` are rejected.

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OffsetParseError {
    #[error("offset is empty")]
    Empty,
    #[error("invalid offset: {0}")]
    Invalid(String),
}

pub fn parse_offset(s: &str) -> Result<BigInt, OffsetParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(OffsetParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    // parse_bytes also takes a sign ("--1") and `_` separators ("1_000")
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(OffsetParseError::Invalid(s.to_string()));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| OffsetParseError::Invalid(s.to_string()))?;

    Ok(if negative { -magnitude } else { magnitude })
}
