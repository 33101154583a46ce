//! # ipstep common
//!
//! Types shared by the arithmetic engine and its front ends.
//!
//! * **[`network`]**: address families, canonical reduction and per-family bounds.
//! * **[`error`]**: the range error raised when a result leaves the address space.
//! * **[`config`]**: output settings for front ends.
//! * **[`utils`]**: byte helpers.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
