use std::net::IpAddr;

use ipstep_common::config::Config;
use ipstep_core::{Family, canonical, to_integer};

use crate::terminal::print;

pub fn family(addr: IpAddr, cfg: &Config) {
    let family: Family = Family::of(addr);

    if cfg.is_quiet() {
        print::bare(family);
        return;
    }

    print::header("Address family", cfg.quiet);
    print::aligned_line("Address", print::address(addr));
    if canonical(addr) != addr {
        print::aligned_line("Canonical", print::address(canonical(addr)));
    }
    print::aligned_line("Family", family.to_string());
    print::aligned_line("Bits", family.bits().to_string());
    print::aligned_line("Integer", to_integer(addr).to_string());
}
