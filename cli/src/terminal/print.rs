//! Presentation lines. Everything goes through [`print`], i.e. through the
//! tracing subscriber, so output stays ordered with log events and spinners.

use std::fmt::Display;

use crate::terminal::{colors, format::Detail, logging::PRINT_TARGET};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 8;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

fn rule(ch: &str, width: usize) -> String {
    ch.repeat(width)
}

/// `left` and `right` padding that centres something `width` columns wide.
fn padding(width: usize) -> (usize, usize) {
    let free: usize = TOTAL_WIDTH.saturating_sub(width);
    (free / 2, free - free / 2)
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ GEOTRACE v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = padding(UnicodeWidthStr::width(title.as_str()));

    print(&format!(
        "{}{}{}",
        rule("═", left).bright_black(),
        title.bright_green().bold(),
        rule("═", right).bright_black()
    ));
}

/// A section title, hidden from `-q` on.
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", title.to_uppercase());
    let (left, right) = padding(title.chars().count());

    print(&format!(
        "{}{}{}",
        rule("─", left).bright_black(),
        title.bright_green(),
        rule("─", right).bright_black()
    ));
}

pub fn fat_separator() {
    print(&rule("═", TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `> Key......: value`
pub fn aligned_line(key: &str, value: impl Display) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] name` followed by one branch per detail row.
pub fn hop_tree(idx: usize, name: &str, details: &[Detail]) {
    let name: ColoredString = if name.is_empty() {
        "unknown place".italic().color(colors::SEPARATOR)
    } else {
        name.color(colors::PRIMARY)
    };
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name
    ));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(KEY_WIDTH.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: impl Display) {
    let msg: String = msg.to_string();
    let (left, _) = padding(console::measure_text_width(&msg));
    print(&format!("{}{}", " ".repeat(left), msg));
}

pub fn end_of_program() {
    fat_separator();
}
