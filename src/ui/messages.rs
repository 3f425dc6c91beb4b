//! Colored status lines for terminal output.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn line(color: &str, icon: &str, msg: impl fmt::Display) {
    println!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    line(BLUE, "ℹ️", msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(GREEN, "✅", msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(YELLOW, "⚠️", msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, "❌", RESET, msg);
}
