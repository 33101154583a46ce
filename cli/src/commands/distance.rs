use std::net::IpAddr;

use ipstep_common::config::Config;
use ipstep_core::Family;
use tracing::warn;

use crate::terminal::print;

pub fn distance(from: IpAddr, to: IpAddr, cfg: &Config) -> anyhow::Result<()> {
    let Some(offset) = ipstep_core::distance(from, to) else {
        warn!("{from} is {} but {to} is {}", Family::of(from), Family::of(to));
        anyhow::bail!("{from} and {to} belong to different address families");
    };

    if cfg.is_quiet() {
        print::bare(&offset);
        return Ok(());
    }

    print::header("Distance", cfg.quiet);
    print::aligned_line("From", print::address(from));
    print::aligned_line("To", print::address(to));
    print::aligned_line("Offset", offset.to_string());
    Ok(())
}
