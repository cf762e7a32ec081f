//! ANSI color helper utilities for terminal output.

use crate::ui::messages::colors_enabled;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

fn wrap(color: &str, value: &str) -> String {
    if colors_enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Entry → green, Exit → blue.
pub fn colorize_direction(value: &str) -> String {
    match value {
        "Entry" => wrap(GREEN, value),
        "Exit" => wrap(BLUE, value),
        _ => value.to_string(),
    }
}

/// Temperature flags in red, time-window flags in yellow.
pub fn colorize_flags(value: &str) -> String {
    if value.trim().is_empty() {
        value.to_string()
    } else if value.contains("TEMP") {
        wrap(RED, value)
    } else {
        wrap(YELLOW, value)
    }
}

/// Zero-presence days greyed out.
pub fn colorize_hours(value: &str) -> String {
    if value == "0.00" || value == "0h 0m 0s" {
        wrap(GREY, value)
    } else {
        value.to_string()
    }
}
