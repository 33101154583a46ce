use std::net::IpAddr;

use anyhow::Context;
use num_bigint::BigInt;
use tracing::info;

use ipstep_common::config::Config;
use ipstep_core::{Family, add_big, sub_big};

use crate::terminal::print;

pub fn add(addr: IpAddr, offset: &BigInt, cfg: &Config) -> anyhow::Result<()> {
    let result: IpAddr =
        add_big(addr, offset).with_context(|| format!("cannot add {offset} to {addr}"))?;
    info!("{addr} + {offset} = {result}");
    report("Addition", addr, offset, result, cfg);
    Ok(())
}

pub fn sub(addr: IpAddr, offset: &BigInt, cfg: &Config) -> anyhow::Result<()> {
    let result: IpAddr =
        sub_big(addr, offset).with_context(|| format!("cannot subtract {offset} from {addr}"))?;
    info!("{addr} - {offset} = {result}");
    report("Subtraction", addr, offset, result, cfg);
    Ok(())
}

fn report(title: &str, addr: IpAddr, offset: &BigInt, result: IpAddr, cfg: &Config) {
    if cfg.is_quiet() {
        print::bare(result);
        return;
    }

    print::header(title, cfg.quiet);
    print::aligned_line("Address", print::address(addr));
    print::aligned_line("Family", Family::of(addr).to_string());
    print::aligned_line("Offset", offset.to_string());
    print::aligned_line("Result", print::address(result));
}
