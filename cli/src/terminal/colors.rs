use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 170, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 80, g: 160, b: 255 };
pub const COORDINATES: Color = Color::Yellow;
pub const PLACE: Color = Color::Green;
