use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0x6f, g: 0xc3, b: 0xdf };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 0x9a, g: 0xe6, b: 0x7e };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 0xe6, g: 0xb4, b: 0x50 };
