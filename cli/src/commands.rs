pub mod arith;
pub mod distance;
pub mod family;

use std::net::IpAddr;

use clap::{ArgAction, Parser, Subcommand};
use ipstep_core::parse_offset;
use num_bigint::BigInt;

#[derive(Parser)]
#[command(name = "ipstep")]
#[command(about = "Exact, range-checked arithmetic on IP addresses.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print only the bare result
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an offset to an address
    #[command(alias = "a")]
    Add {
        addr: IpAddr,
        /// Decimal or 0x-prefixed hex, may be negative
        #[arg(value_parser = parse_offset, allow_hyphen_values = true)]
        offset: BigInt,
    },
    /// Subtract an offset from an address
    #[command(alias = "s")]
    Sub {
        addr: IpAddr,
        /// Decimal or 0x-prefixed hex, may be negative
        #[arg(value_parser = parse_offset, allow_hyphen_values = true)]
        offset: BigInt,
    },
    /// Show the family and integer value of an address
    #[command(alias = "f")]
    Family { addr: IpAddr },
    /// Show the signed offset between two addresses
    #[command(alias = "d")]
    Distance { from: IpAddr, to: IpAddr },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
