use std::fmt;
use std::sync::OnceLock;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_MAGENTA: &str = "\x1b[35m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_ALERT: &str = "🚨";

/// Honour the NO_COLOR convention.
pub fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none())
}

fn paint(color: &str) -> (&str, &str, &str) {
    if colors_enabled() {
        (color, BOLD, RESET)
    } else {
        ("", "", "")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let (c, b, r) = paint(FG_BLUE);
    println!("{}{}{} {}{}", c, b, ICON_INFO, r, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let (c, b, r) = paint(FG_GREEN);
    println!("{}{}{} {}{}", c, b, ICON_OK, r, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let (c, b, r) = paint(FG_YELLOW);
    println!("{}{}{} {}{}", c, b, ICON_WARN, r, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let (c, b, r) = paint(FG_RED);
    eprintln!("{}{}{} {}{}", c, b, ICON_ERR, r, msg);
}

/// Policy alert banner (late arrivals, high temperatures, absences...).
pub fn alert<T: fmt::Display>(label: &str, count: T) {
    let (c, b, r) = paint(FG_MAGENTA);
    println!("{}{}{} {}:{} {}", c, b, ICON_ALERT, label, r, count);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    let (c, b, r) = paint(FG_BLUE);
    println!("\n{}{}====================== {}{}", c, b, msg, r);
}
