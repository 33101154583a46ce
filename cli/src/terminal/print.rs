use std::fmt::Display;
use std::net::IpAddr;

use colored::*;

use crate::terminal::colors;
use ipstep_common::config::Config;

pub const TOTAL_WIDTH: usize = 48;
const KEY_WIDTH: usize = 10;

/// Applies the colour settings. Must run before anything is printed.
pub fn initialize(cfg: &Config) {
    if cfg.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    println!("{msg}");
}

/// Prints a value without decoration, for quiet mode.
pub fn bare<T: Display>(value: T) {
    print(&value.to_string());
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn address(addr: IpAddr) -> ColoredString {
    match addr {
        IpAddr::V4(_) => addr.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(_) => addr.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn aligned_line<V: Into<ColoredString>>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.into();
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}{} {}", prefix, key.color(colors::PRIMARY), colon, value));
}
